//! Wallet provider descriptors and the account type they expose.

/// Externally owned account surfaced by a wallet provider. Only the public
/// address ever crosses into the application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletAccount {
    pub address: String,
}

/// A connectable wallet provider as it appears in the connect dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WalletProviderInfo {
    pub id: &'static str,
    pub name: &'static str,
    address: &'static str,
}

impl WalletProviderInfo {
    /// Account the provider exposes once connected.
    pub fn account(&self) -> WalletAccount {
        WalletAccount {
            address: self.address.to_string(),
        }
    }
}

/// Providers offered in the connect dialog. Stand-ins for extension
/// discovery, each with a stable demo account.
pub fn available_providers() -> &'static [WalletProviderInfo] {
    const PROVIDERS: [WalletProviderInfo; 3] = [
        WalletProviderInfo {
            id: "sui-wallet",
            name: "Sui Wallet",
            address: "0x7c3e1f4a9b2d8e605134fa7cc2b1d9e8f4a65c03",
        },
        WalletProviderInfo {
            id: "suiet",
            name: "Suiet",
            address: "0x9f2a6d1c4e8b3507a2d64f9e1c8b7a3052e4d6f1",
        },
        WalletProviderInfo {
            id: "ethos",
            name: "Ethos",
            address: "0x1234567890abcdef1234567890abcdef12345678",
        },
    ];
    &PROVIDERS
}

/// Shortens an address for display: `0x7c3e…5c03`.
pub fn short_address(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }
    format!("{}…{}", &address[..6], &address[address.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::{available_providers, short_address};

    #[test]
    fn providers_expose_distinct_accounts() {
        let providers = available_providers();
        assert_eq!(providers.len(), 3);

        let first = providers[0].account();
        let second = providers[1].account();
        assert_ne!(first.address, second.address);
    }

    #[test]
    fn short_address_elides_the_middle() {
        assert_eq!(
            short_address("0x1234567890abcdef1234567890abcdef12345678"),
            "0x1234…5678"
        );
        assert_eq!(short_address("0xabc"), "0xabc");
    }
}
