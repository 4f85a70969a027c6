pub mod error_popup;
