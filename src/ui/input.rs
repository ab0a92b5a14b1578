// SPDX-License-Identifier: MPL-2.0
//! Translation of native Iced events into overlay messages.
//!
//! The overlay follows a single pointer. The first finger to touch down (or
//! the left mouse button when no finger is down) owns the press until it is
//! lifted; every other finger is ignored.

use crate::domain::gesture::Point;
use crate::overlay;
use iced::keyboard::{self, key::Named, Key};
use iced::{mouse, touch, window, Event};

/// Which device currently owns the press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Owner {
    Finger(touch::Finger),
    Mouse,
}

/// Follows one pointer across touch and mouse events.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    owner: Option<Owner>,
    cursor: Point,
}

impl PointerTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.owner.is_some()
    }

    /// Maps `event` to an overlay message, if it concerns the tracked pointer
    /// or the window size.
    pub fn translate(&mut self, event: &Event) -> Option<overlay::Message> {
        match event {
            Event::Touch(touch_event) => self.touch(touch_event),
            Event::Mouse(mouse_event) => self.mouse(mouse_event),
            Event::Window(window::Event::Resized(size)) => Some(overlay::Message::Resized {
                width: size.width,
                height: size.height,
            }),
            _ => None,
        }
    }

    fn touch(&mut self, event: &touch::Event) -> Option<overlay::Message> {
        match event {
            touch::Event::FingerPressed { id, position } => {
                if self.owner.is_some() {
                    return None;
                }
                self.owner = Some(Owner::Finger(*id));
                Some(overlay::Message::PointerPressed(to_point(*position)))
            }
            touch::Event::FingerMoved { id, position } => (self.owner
                == Some(Owner::Finger(*id)))
            .then(|| overlay::Message::PointerMoved(to_point(*position))),
            touch::Event::FingerLifted { id, .. } => {
                self.release_if(Owner::Finger(*id), overlay::Message::PointerReleased)
            }
            touch::Event::FingerLost { id, .. } => {
                self.release_if(Owner::Finger(*id), overlay::Message::PointerCancelled)
            }
        }
    }

    fn mouse(&mut self, event: &mouse::Event) -> Option<overlay::Message> {
        match event {
            mouse::Event::CursorMoved { position } => {
                self.cursor = to_point(*position);
                (self.owner == Some(Owner::Mouse))
                    .then_some(overlay::Message::PointerMoved(self.cursor))
            }
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                if self.owner.is_some() {
                    return None;
                }
                self.owner = Some(Owner::Mouse);
                Some(overlay::Message::PointerPressed(self.cursor))
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => {
                self.release_if(Owner::Mouse, overlay::Message::PointerReleased)
            }
            mouse::Event::CursorLeft => {
                self.release_if(Owner::Mouse, overlay::Message::PointerCancelled)
            }
            _ => None,
        }
    }

    fn release_if(&mut self, owner: Owner, message: overlay::Message) -> Option<overlay::Message> {
        if self.owner != Some(owner) {
            return None;
        }
        self.owner = None;
        Some(message)
    }
}

/// Volume step requested from the keyboard: arrow up or down.
#[must_use]
pub fn volume_step(event: &Event) -> Option<i32> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match key {
            Key::Named(Named::ArrowUp) => Some(1),
            Key::Named(Named::ArrowDown) => Some(-1),
            _ => None,
        },
        _ => None,
    }
}

fn to_point(position: iced::Point) -> Point {
    Point::new(position.x, position.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    fn finger(id: u64, kind: fn(touch::Finger, iced::Point) -> touch::Event, x: f32) -> Event {
        Event::Touch(kind(touch::Finger(id), iced::Point::new(x, 100.0)))
    }

    fn pressed(id: touch::Finger, position: iced::Point) -> touch::Event {
        touch::Event::FingerPressed { id, position }
    }

    fn moved(id: touch::Finger, position: iced::Point) -> touch::Event {
        touch::Event::FingerMoved { id, position }
    }

    fn lifted(id: touch::Finger, position: iced::Point) -> touch::Event {
        touch::Event::FingerLifted { id, position }
    }

    fn lost(id: touch::Finger, position: iced::Point) -> touch::Event {
        touch::Event::FingerLost { id, position }
    }

    #[test]
    fn first_finger_owns_the_press() {
        let mut tracker = PointerTracker::new();

        assert_eq!(
            tracker.translate(&finger(1, pressed, 10.0)),
            Some(overlay::Message::PointerPressed(Point::new(10.0, 100.0)))
        );
        assert_eq!(tracker.translate(&finger(2, pressed, 50.0)), None);
        assert_eq!(tracker.translate(&finger(2, moved, 60.0)), None);
        assert_eq!(
            tracker.translate(&finger(1, moved, 20.0)),
            Some(overlay::Message::PointerMoved(Point::new(20.0, 100.0)))
        );
        assert_eq!(tracker.translate(&finger(2, lifted, 60.0)), None);
        assert_eq!(
            tracker.translate(&finger(1, lifted, 20.0)),
            Some(overlay::Message::PointerReleased)
        );
        assert!(!tracker.is_pressed());
    }

    #[test]
    fn lost_finger_cancels() {
        let mut tracker = PointerTracker::new();
        tracker.translate(&finger(7, pressed, 10.0));
        assert_eq!(
            tracker.translate(&finger(7, lost, 10.0)),
            Some(overlay::Message::PointerCancelled)
        );
    }

    #[test]
    fn left_mouse_button_acts_as_pointer() {
        let mut tracker = PointerTracker::new();
        let cursor = |x: f32| {
            Event::Mouse(mouse::Event::CursorMoved {
                position: iced::Point::new(x, 40.0),
            })
        };

        // Hovering without a press is not a move
        assert_eq!(tracker.translate(&cursor(5.0)), None);
        assert_eq!(
            tracker.translate(&Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))),
            Some(overlay::Message::PointerPressed(Point::new(5.0, 40.0)))
        );
        assert_eq!(
            tracker.translate(&cursor(45.0)),
            Some(overlay::Message::PointerMoved(Point::new(45.0, 40.0)))
        );
        assert_eq!(
            tracker.translate(&Event::Mouse(mouse::Event::ButtonReleased(
                mouse::Button::Right
            ))),
            None
        );
        assert_eq!(
            tracker.translate(&Event::Mouse(mouse::Event::ButtonReleased(
                mouse::Button::Left
            ))),
            Some(overlay::Message::PointerReleased)
        );
    }

    #[test]
    fn mouse_is_ignored_while_a_finger_is_down() {
        let mut tracker = PointerTracker::new();
        tracker.translate(&finger(1, pressed, 10.0));
        assert_eq!(
            tracker.translate(&Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))),
            None
        );
    }

    #[test]
    fn cursor_leaving_cancels_mouse_press() {
        let mut tracker = PointerTracker::new();
        tracker.translate(&Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)));
        assert_eq!(
            tracker.translate(&Event::Mouse(mouse::Event::CursorLeft)),
            Some(overlay::Message::PointerCancelled)
        );
    }

    #[test]
    fn resize_is_forwarded() {
        let mut tracker = PointerTracker::new();
        assert_eq!(
            tracker.translate(&Event::Window(window::Event::Resized(Size::new(800.0, 600.0)))),
            Some(overlay::Message::Resized {
                width: 800.0,
                height: 600.0
            })
        );
    }
}
