/// User actions the host forwards to the plugin.
/// The command palette entry and the ribbon icon run the same copy action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Command,
    RibbonIcon,
}
