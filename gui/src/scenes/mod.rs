pub mod cipher_panel;

pub use cipher_panel::CipherPanelState;
