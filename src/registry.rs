//! Command-to-module registry.
//!
//! The registry is the sole configuration surface of the tool: an ordered
//! mapping from command name to the destination module, or `None` for
//! commands that were already migrated by hand and must be skipped. It is
//! edited in source form (see [`Registry::tauri_commands`]); tests build
//! synthetic registries through the same constructors.

/// A single registry row: one command and where it should end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub command: String,
    /// Destination module, or `None` for commands handled manually.
    pub module: Option<String>,
}

/// Ordered command-to-module mapping. Iteration order is insertion order,
/// and the emitter preserves it within each module's output file.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command destined for `module`.
    pub fn assign(mut self, command: &str, module: &str) -> Self {
        self.entries.push(RegistryEntry {
            command: command.to_string(),
            module: Some(module.to_string()),
        });
        self
    }

    /// Append a command that is excluded from processing.
    pub fn unassigned(mut self, command: &str) -> Self {
        self.entries.push(RegistryEntry {
            command: command.to_string(),
            module: None,
        });
        self
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The migration table for the original monolithic `lib.rs`.
    ///
    /// Auth commands were already moved by hand and stay unassigned.
    pub fn tauri_commands() -> Self {
        Self::new()
            // auth (manual)
            .unassigned("get_device_mac_address")
            .unassigned("generate_encryption_key")
            .unassigned("encrypt_password")
            .unassigned("save_login_credentials")
            .unassigned("get_saved_credentials")
            .unassigned("clear_saved_credentials")
            // wallet
            .assign("batch_import_private_keys", "wallet")
            .assign("batch_create_wallets", "wallet")
            .assign("get_wallets", "wallet")
            .assign("export_wallets", "wallet")
            .assign("update_wallet_name", "wallet")
            .assign("delete_wallet", "wallet")
            // social
            .assign("validate_social_token", "social")
            .assign("batch_import_social_accounts", "social")
            .assign("import_social_account", "social")
            .assign("get_social_accounts", "social")
            .assign("delete_social_account", "social")
            // proxy
            .assign("get_proxies", "proxy")
            .assign("add_proxy", "proxy")
            .assign("batch_add_proxies", "proxy")
            .assign("delete_proxy", "proxy")
            .assign("update_proxy", "proxy")
            .assign("ping_proxy", "proxy")
            // browser
            .assign("get_browser_config", "browser")
            .assign("save_browser_config", "browser")
            .assign("get_browser_windows", "browser")
            .assign("create_browser_window", "browser")
            .assign("update_browser_window", "browser")
            .assign("delete_browser_window", "browser")
            .assign("test_browser_api", "browser")
            .assign("check_browser_profiles", "browser")
            .assign("create_browser_profile_api", "browser")
            .assign("delete_browser_profile_api", "browser")
            .assign("update_browser_profile_api", "browser")
            .assign("start_browser_window", "browser")
            .assign("stop_browser_window", "browser")
            .assign("batch_start_windows", "browser")
            .assign("batch_stop_windows", "browser")
            // system
            .assign("get_system_info", "system")
    }
}
