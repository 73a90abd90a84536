//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host should perform after an update.

use crate::layout::MainContentGeometry;

/// Side effects returned by `update`
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the sidebar chrome
    Redraw,
    /// Apply new margins/width/padding to the main content region
    ApplyContentGeometry(MainContentGeometry),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Combine commands, flattening `None` away
    pub fn batch(cmds: Vec<Cmd>) -> Cmd {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| *c != Cmd::None).collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Whether this command (or any in a batch) asks for a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw | Cmd::ApplyContentGeometry(_) => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::needs_redraw),
            Cmd::None => false,
        }
    }

    /// The geometry carried by this command, if any
    pub fn content_geometry(&self) -> Option<&MainContentGeometry> {
        match self {
            Cmd::ApplyContentGeometry(g) => Some(g),
            Cmd::Batch(cmds) => cmds.iter().find_map(Cmd::content_geometry),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_flattens() {
        assert_eq!(Cmd::batch(vec![]), Cmd::None);
        assert_eq!(Cmd::batch(vec![Cmd::None, Cmd::Redraw]), Cmd::Redraw);
        let geometry = MainContentGeometry::default();
        let cmd = Cmd::batch(vec![Cmd::ApplyContentGeometry(geometry), Cmd::Redraw]);
        assert!(matches!(cmd, Cmd::Batch(ref v) if v.len() == 2));
        assert!(cmd.needs_redraw());
        assert_eq!(cmd.content_geometry(), Some(&geometry));
    }
}
