mod panel;

pub use panel::parameter_panel;
