// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Landing-to-journal screen transition.
//!
//! ```text
//! Closed -> Shaking    (first click on the closed notebook)
//! Shaking -> Opening   (shake animation finished)
//! Opening -> Open      (fade-out delay elapsed)
//! ```
//!
//! `Open` is terminal. Times are seconds on the UI clock (`egui::InputState::time`).

use crate::config::Settings;

/// Where the notebook is in its opening sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScreenState {
    Closed,
    Shaking { since: f64 },
    Opening { since: f64 },
    Open,
}

/// Animations painted on the landing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    Shake,
    FadeOut,
}

/// Drives the one-way open sequence.
#[derive(Debug)]
pub struct ScreenController {
    state: ScreenState,
    shake_duration: f64,
    fade_duration: f64,
}

/// Peak horizontal displacement of the shake, in points.
const SHAKE_AMPLITUDE: f32 = 8.0;
/// Shake oscillations per second.
const SHAKE_FREQUENCY: f64 = 10.0;

impl ScreenController {
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: ScreenState::Closed,
            shake_duration: settings.shake_duration,
            fade_duration: settings.fade_duration,
        }
    }

    /// Handle a click on the closed notebook. Only the first click does anything.
    pub fn click(&mut self, now: f64) -> bool {
        if self.state != ScreenState::Closed {
            return false;
        }
        log::info!("Notebook clicked, starting shake");
        self.state = ScreenState::Shaking { since: now };
        true
    }

    /// Report that a landing animation finished.
    ///
    /// Only the end of the shake advances the sequence; other completions are ignored.
    pub fn animation_ended(&mut self, animation: Animation, now: f64) -> bool {
        match (self.state, animation) {
            (ScreenState::Shaking { .. }, Animation::Shake) => {
                log::info!("Shake finished, fading out landing");
                self.state = ScreenState::Opening { since: now };
                true
            }
            _ => false,
        }
    }

    /// Advance time-driven transitions. Call once per frame.
    ///
    /// Returns the landing animation that finished on this tick, if any. The
    /// fade ends together with the switch delay; the switch is driven by the
    /// delay alone.
    pub fn tick(&mut self, now: f64) -> Option<Animation> {
        match self.state {
            ScreenState::Shaking { since } if now - since >= self.shake_duration => {
                self.animation_ended(Animation::Shake, now);
                Some(Animation::Shake)
            }
            ScreenState::Opening { since } if now - since >= self.fade_duration => {
                log::info!("Landing hidden, journal layout shown");
                self.state = ScreenState::Open;
                Some(Animation::FadeOut)
            }
            _ => None,
        }
    }

    /// Horizontal offset of the notebook while it shakes, decaying to zero.
    pub fn shake_offset(&self, now: f64) -> f32 {
        match self.state {
            ScreenState::Shaking { since } => {
                let elapsed = (now - since).max(0.0);
                let progress = (elapsed / self.shake_duration).min(1.0);
                let wave = (elapsed * SHAKE_FREQUENCY * std::f64::consts::TAU).sin();
                (wave * (1.0 - progress)) as f32 * SHAKE_AMPLITUDE
            }
            _ => 0.0,
        }
    }

    /// Opacity of the landing view, 1.0 until the fade starts.
    pub fn landing_opacity(&self, now: f64) -> f32 {
        match self.state {
            ScreenState::Opening { since } => {
                let progress = ((now - since) / self.fade_duration).clamp(0.0, 1.0);
                (1.0 - progress) as f32
            }
            ScreenState::Open => 0.0,
            _ => 1.0,
        }
    }

    pub fn landing_visible(&self) -> bool {
        self.state != ScreenState::Open
    }

    pub fn layout_visible(&self) -> bool {
        self.state == ScreenState::Open
    }

    /// True while an animation or the fade deadline needs further frames.
    pub fn is_animating(&self) -> bool {
        matches!(
            self.state,
            ScreenState::Shaking { .. } | ScreenState::Opening { .. }
        )
    }
}

#[cfg(test)]
impl ScreenController {
    fn state(&self) -> ScreenState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> ScreenController {
        ScreenController::new(&Settings::default())
    }

    #[test]
    fn test_opens_after_shake_and_fade() {
        let mut screen = controller();
        assert!(screen.landing_visible());
        assert!(!screen.layout_visible());

        assert!(screen.click(0.0));
        screen.tick(0.25);
        assert_eq!(screen.state(), ScreenState::Shaking { since: 0.0 });

        screen.tick(0.5);
        assert_eq!(screen.state(), ScreenState::Opening { since: 0.5 });

        // 600 ms fade has not elapsed yet
        screen.tick(1.0);
        assert!(screen.landing_visible());

        screen.tick(1.2);
        assert_eq!(screen.state(), ScreenState::Open);
        assert!(!screen.landing_visible());
        assert!(screen.layout_visible());
        assert!(!screen.is_animating());
    }

    #[test]
    fn test_clicks_after_the_first_are_ignored() {
        let mut screen = controller();
        assert!(screen.click(0.0));
        assert!(!screen.click(0.1));
        assert_eq!(screen.state(), ScreenState::Shaking { since: 0.0 });

        screen.tick(0.6);
        screen.tick(1.3);
        for t in 0..10 {
            assert!(!screen.click(2.0 + t as f64));
        }
        assert_eq!(screen.state(), ScreenState::Open);
    }

    #[test]
    fn test_unrelated_animation_end_does_not_advance() {
        let mut screen = controller();
        screen.click(0.0);

        assert!(!screen.animation_ended(Animation::FadeOut, 0.1));
        assert_eq!(screen.state(), ScreenState::Shaking { since: 0.0 });

        assert!(screen.animation_ended(Animation::Shake, 0.2));
        assert_eq!(screen.state(), ScreenState::Opening { since: 0.2 });

        // A second shake completion while opening changes nothing
        assert!(!screen.animation_ended(Animation::Shake, 0.3));
        assert_eq!(screen.state(), ScreenState::Opening { since: 0.2 });
    }

    #[test]
    fn test_tick_reports_finished_animations() {
        let mut screen = controller();
        assert_eq!(screen.tick(0.0), None);

        screen.click(0.0);
        assert_eq!(screen.tick(0.3), None);
        assert_eq!(screen.tick(0.5), Some(Animation::Shake));
        assert_eq!(screen.tick(0.9), None);
        assert_eq!(screen.tick(1.1), Some(Animation::FadeOut));
        assert_eq!(screen.state(), ScreenState::Open);

        // Open is terminal
        assert_eq!(screen.tick(5.0), None);
    }

    #[test]
    fn test_fade_end_alone_does_not_open_journal() {
        let mut screen = controller();
        screen.click(0.0);
        screen.tick(0.5);

        // Only the delay switches screens
        assert!(!screen.animation_ended(Animation::FadeOut, 0.6));
        assert_eq!(screen.state(), ScreenState::Opening { since: 0.5 });
        assert!(screen.landing_visible());
    }

    #[test]
    fn test_closed_notebook_ignores_time() {
        let mut screen = controller();
        screen.tick(100.0);
        assert_eq!(screen.state(), ScreenState::Closed);
        assert!(!screen.animation_ended(Animation::Shake, 100.0));
        assert_eq!(screen.state(), ScreenState::Closed);
    }

    #[test]
    fn test_landing_fades_during_opening() {
        let mut screen = controller();
        assert_eq!(screen.landing_opacity(0.0), 1.0);

        screen.click(0.0);
        screen.tick(0.5);
        assert_eq!(screen.landing_opacity(0.5), 1.0);
        assert!((screen.landing_opacity(0.8) - 0.5).abs() < 1e-4);

        screen.tick(1.2);
        assert_eq!(screen.landing_opacity(1.2), 0.0);
    }

    #[test]
    fn test_shake_offset_is_bounded_and_settles() {
        let mut screen = controller();
        assert_eq!(screen.shake_offset(0.0), 0.0);

        screen.click(0.0);
        for step in 0..50 {
            let offset = screen.shake_offset(step as f64 * 0.01);
            assert!(offset.abs() <= SHAKE_AMPLITUDE);
        }
        assert!(screen.shake_offset(0.5).abs() < 1e-4);
    }
}
