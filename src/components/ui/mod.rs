mod alert;
mod asset_card;
mod button;
mod spinner;
mod wallet_modal;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use asset_card::AssetCard;
pub(crate) use button::{Button, ButtonVariant};
pub(crate) use spinner::Spinner;
pub(crate) use wallet_modal::WalletModal;
