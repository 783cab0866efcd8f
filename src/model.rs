// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! LessonModel holds everything the frame loop mutates: running state,
//! sprite angle, debug caption countdown and the rng used to pick cells.
//! It lives for one run of the loop and knows nothing about rendering.

use crate::{
    event::{Event, KeyEvent},
    grid::{create_rect_grid, RectGrid},
    util::{Rand, Rect},
    DEBUG_TEXT_FRAMES, GRID_COLS, GRID_ROWS,
};
use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopStatus {
    Running,
    /// absorbing, the loop exits and teardown follows
    Terminating,
}

pub struct LessonModel {
    pub status: LoopStatus,
    /// whole degrees, always in [0, 360)
    pub angle: u16,
    /// frames left to draw the debug caption
    pub debug_countdown: u32,
    pub debug_text: String,
    /// iterations started so far
    pub frame: u64,
    /// stop after this many iterations, as if quit was received
    pub frame_limit: Option<u64>,
    pub grid: RectGrid,
    pub rand: Rand,
}

impl Default for LessonModel {
    fn default() -> Self {
        Self::new()
    }
}

impl LessonModel {
    pub fn new() -> Self {
        Self {
            status: LoopStatus::Running,
            angle: 0,
            debug_countdown: 0,
            debug_text: String::new(),
            frame: 0,
            frame_limit: None,
            grid: create_rect_grid(),
            rand: Rand::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == LoopStatus::Running
    }

    pub fn quit(&mut self) {
        if self.status != LoopStatus::Terminating {
            info!("quit after frame {}", self.frame);
        }
        self.status = LoopStatus::Terminating;
    }

    /// start of an iteration: count it and turn the sprite one degree
    pub fn update(&mut self) {
        self.frame += 1;
        self.advance_angle();
    }

    pub fn advance_angle(&mut self) -> u16 {
        self.angle += 1;
        if self.angle >= 360 {
            self.angle = 0;
        }
        self.angle
    }

    /// One cell chosen uniformly, independent of earlier picks
    pub fn pick_cell(&mut self) -> Rect {
        let row = self.rand.gen_below(GRID_ROWS);
        let col = self.rand.gen_below(GRID_COLS);
        self.grid[row][col]
    }

    /// True if the debug caption is drawn this frame, uses up one frame of the countdown
    pub fn take_debug_frame(&mut self) -> bool {
        if self.debug_countdown > 0 {
            self.debug_countdown -= 1;
            true
        } else {
            false
        }
    }

    pub fn on_key(&mut self, ke: &KeyEvent) {
        self.debug_text = ke.debug_text();
        self.debug_countdown = DEBUG_TEXT_FRAMES;
    }

    pub fn handle_event(&mut self, e: &Event) {
        match e {
            Event::Quit => self.quit(),
            Event::Key(ke) => self.on_key(ke),
        }
    }

    /// end of an iteration, honours the frame limit
    pub fn check_frame_limit(&mut self) {
        if let Some(limit) = self.frame_limit {
            if self.frame >= limit {
                self.quit();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyEventKind;

    #[test]
    fn test_angle_wraps_at_360() {
        let mut m = LessonModel::new();
        let seq: Vec<u16> = (0..720).map(|_| m.advance_angle()).collect();
        assert!(seq.iter().all(|a| *a < 360));
        assert_eq!(seq[0], 1);
        assert_eq!(seq[358], 359);
        assert_eq!(seq[359], 0);
        assert_eq!(seq[360], 1);
        // period 360
        for i in 0..360 {
            assert_eq!(seq[i], seq[i + 360]);
        }
    }

    #[test]
    fn test_debug_countdown() {
        let mut m = LessonModel::new();
        assert!(!m.take_debug_frame());

        // key event handled before frame N
        m.on_key(&KeyEvent::new(KeyEventKind::Press, 'a' as i32, "A"));
        assert_eq!(m.debug_text, "A pressed");
        let drawn: Vec<bool> = (0..400).map(|_| m.take_debug_frame()).collect();
        assert!(drawn[..300].iter().all(|d| *d));
        assert!(drawn[300..].iter().all(|d| !*d));
    }

    #[test]
    fn test_key_resets_countdown() {
        let mut m = LessonModel::new();
        m.on_key(&KeyEvent::new(KeyEventKind::Press, 'a' as i32, "A"));
        for _ in 0..250 {
            m.take_debug_frame();
        }
        m.handle_event(&Event::Key(KeyEvent::new(KeyEventKind::Release, 'a' as i32, "A")));
        assert_eq!(m.debug_countdown, 300);
        assert_eq!(m.debug_text, "A released");
    }

    #[test]
    fn test_pick_cell_stays_on_grid() {
        let mut m = LessonModel::new();
        m.rand.srand(3);
        for _ in 0..1000 {
            let r = m.pick_cell();
            assert_eq!(r.x % 10, 0);
            assert_eq!(r.y % 10, 0);
            assert!(r.x < 640 && r.y < 480);
        }
    }

    #[test]
    fn test_quit_is_absorbing() {
        let mut m = LessonModel::new();
        assert!(m.is_running());
        m.handle_event(&Event::Quit);
        assert_eq!(m.status, LoopStatus::Terminating);
        m.handle_event(&Event::Key(KeyEvent::new(KeyEventKind::Press, 'a' as i32, "A")));
        assert!(!m.is_running());
    }

    #[test]
    fn test_frame_limit() {
        let mut m = LessonModel::new();
        m.frame_limit = Some(2);
        m.update();
        m.check_frame_limit();
        assert!(m.is_running());
        m.update();
        m.check_frame_limit();
        assert!(!m.is_running());
    }
}
