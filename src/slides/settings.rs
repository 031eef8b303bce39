use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Settings {
    pub neighbors: usize,
    pub loop_index: usize,
    pub skip_index: Option<usize>,
    pub auto_advance: bool,
    pub slide_duration: Duration,
    pub keyboard_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            neighbors: 1,
            loop_index: 0,
            skip_index: None,
            auto_advance: true,
            slide_duration: Duration::from_millis(3000),
            keyboard_enabled: true,
        }
    }
}
