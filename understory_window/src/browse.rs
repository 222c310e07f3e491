// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browse-info ("hover tooltip") modes.

use crate::error::WindowError;
use crate::tree::WindowTree;
use crate::types::{BrowseInfoMode, WindowId};

impl WindowTree {
    /// Browse modes of the window, in increasing order of hover time.
    pub fn browse_modes(&self, id: WindowId) -> &[BrowseInfoMode] {
        self.get(id)
            .map(|n| n.browse_modes.as_slice())
            .unwrap_or(&[])
    }

    /// Text of browse mode `mode`.
    pub fn browse_info_text(&self, id: WindowId, mode: usize) -> Result<&str, WindowError> {
        let modes = &self.get(id).ok_or(WindowError::StaleWindow(id))?.browse_modes;
        modes
            .get(mode)
            .map(|m| m.text.as_str())
            .ok_or(WindowError::BrowseModeOutOfRange {
                mode,
                len: modes.len(),
            })
    }

    /// Set the hover time of browse mode `mode`, adding modes up to it.
    ///
    /// Added modes take the time of the previous last mode, or `time` when
    /// the window had none.
    pub fn set_browse_mode_time(&mut self, id: WindowId, time: u32, mode: usize) {
        let Some(n) = self.get_mut(id) else {
            return;
        };
        let modes = &mut n.browse_modes;
        if modes.len() <= mode {
            let fill = modes.last().map_or(time, |m| m.time);
            modes.resize(
                mode + 1,
                BrowseInfoMode {
                    time: fill,
                    ..BrowseInfoMode::default()
                },
            );
        }
        modes[mode].time = time;
    }

    /// Set the window displaying browse mode `mode`.
    pub fn set_browse_info_window(
        &mut self,
        id: WindowId,
        window: WindowId,
        mode: usize,
    ) -> Result<(), WindowError> {
        self.browse_mode_mut(id, mode)?.window = Some(window);
        Ok(())
    }

    /// Stop using a custom window for browse mode `mode`.
    pub fn clear_browse_info_window(&mut self, id: WindowId, mode: usize) -> Result<(), WindowError> {
        self.browse_mode_mut(id, mode)?.window = None;
        Ok(())
    }

    /// Set the text of browse mode `mode`.
    pub fn set_browse_text(
        &mut self,
        id: WindowId,
        text: impl Into<String>,
        mode: usize,
    ) -> Result<(), WindowError> {
        self.browse_mode_mut(id, mode)?.text = text.into();
        Ok(())
    }

    /// Replace every browse mode.
    pub fn set_browse_modes(&mut self, id: WindowId, modes: Vec<BrowseInfoMode>) {
        if let Some(n) = self.get_mut(id) {
            n.browse_modes = modes;
        }
    }

    fn browse_mode_mut(
        &mut self,
        id: WindowId,
        mode: usize,
    ) -> Result<&mut BrowseInfoMode, WindowError> {
        let modes = &mut self.get_mut(id).ok_or(WindowError::StaleWindow(id))?.browse_modes;
        let len = modes.len();
        modes
            .get_mut(mode)
            .ok_or(WindowError::BrowseModeOutOfRange { mode, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TreeConfig;
    use crate::types::WindowDesc;

    #[test]
    fn new_windows_start_with_configured_mode() {
        let mut tree = WindowTree::new();
        let tip = tree.create(WindowDesc::default());
        tree.config_mut().default_browse_time = 700;
        tree.config_mut().default_browse_info_window = Some(tip);
        let w = tree.create(WindowDesc::default());
        assert_eq!(
            tree.browse_modes(w),
            &[BrowseInfoMode {
                time: 700,
                window: Some(tip),
                text: String::new(),
            }]
        );
        assert_eq!(
            tree.browse_modes(tip)[0].time,
            TreeConfig::DEFAULT_BROWSE_TIME
        );
    }

    #[test]
    fn mode_time_extends_with_last_time() {
        let mut tree = WindowTree::new();
        let w = tree.create(WindowDesc::default());
        tree.set_browse_mode_time(w, 200, 0);
        tree.set_browse_mode_time(w, 900, 3);
        let times: Vec<u32> = tree.browse_modes(w).iter().map(|m| m.time).collect();
        assert_eq!(times, [200, 200, 200, 900]);
    }

    #[test]
    fn mode_time_on_empty_list_fills_with_new_time() {
        let mut tree = WindowTree::new();
        let w = tree.create(WindowDesc::default());
        tree.set_browse_modes(w, Vec::new());
        tree.set_browse_mode_time(w, 300, 2);
        let times: Vec<u32> = tree.browse_modes(w).iter().map(|m| m.time).collect();
        assert_eq!(times, [300, 300, 300]);
        assert_eq!(tree.browse_modes(w)[1].window, None);
    }

    #[test]
    fn text_and_window_need_existing_mode() {
        let mut tree = WindowTree::new();
        let w = tree.create(WindowDesc::default());
        let tip = tree.create(WindowDesc::default());
        tree.set_browse_text(w, "Save the game", 0).unwrap();
        tree.set_browse_info_window(w, tip, 0).unwrap();
        assert_eq!(tree.browse_info_text(w, 0), Ok("Save the game"));
        assert_eq!(tree.browse_modes(w)[0].window, Some(tip));
        tree.clear_browse_info_window(w, 0).unwrap();
        assert_eq!(tree.browse_modes(w)[0].window, None);
        assert_eq!(
            tree.set_browse_text(w, "late", 1),
            Err(WindowError::BrowseModeOutOfRange { mode: 1, len: 1 })
        );
        assert_eq!(
            tree.browse_info_text(w, 4),
            Err(WindowError::BrowseModeOutOfRange { mode: 4, len: 1 })
        );
        tree.destroy(w);
        assert_eq!(tree.browse_info_text(w, 0), Err(WindowError::StaleWindow(w)));
    }

    #[test]
    fn set_browse_modes_replaces_all() {
        let mut tree = WindowTree::new();
        let w = tree.create(WindowDesc::default());
        let modes = vec![
            BrowseInfoMode {
                time: 100,
                window: None,
                text: "short".into(),
            },
            BrowseInfoMode {
                time: 2000,
                window: None,
                text: "long".into(),
            },
        ];
        tree.set_browse_modes(w, modes.clone());
        assert_eq!(tree.browse_modes(w), modes.as_slice());
        assert_eq!(tree.browse_info_text(w, 1), Ok("long"));
    }
}
