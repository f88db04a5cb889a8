pub const PROGRESS: &str = "progress";
