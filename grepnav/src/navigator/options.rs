use derive_builder::Builder;

#[derive(Builder, Debug, Default, Clone, Copy, Eq, PartialEq)]
#[builder(pattern = "owned", default)]
pub struct NavigatorOptions {
    /// When nothing is found in the requested direction, continue from the opposite end
    pub wrap: bool,
    pub initial_cursor: u64,
}
