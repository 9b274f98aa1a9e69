pub mod tri_state_dropdown;
pub mod sort_controls;
pub mod filter_panel;
