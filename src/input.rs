//! Pointer routing from window events to the particle field
//!
//! Mouse and touch both map onto the same two field inputs. Positions are
//! converted to logical pixels so they match the field's viewport.

use winit::dpi::{LogicalPosition, PhysicalPosition};
use winit::event::{ElementState, MouseButton, Touch, TouchPhase, WindowEvent};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Move { x: f32, y: f32 },
    Click { x: f32, y: f32 },
}

/// Tracks the last cursor position, since winit reports clicks without one.
#[derive(Debug, Default)]
pub struct PointerRouter {
    last_cursor: Option<(f32, f32)>,
}

impl PointerRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(&mut self, event: &WindowEvent, scale_factor: f64) -> Option<PointerInput> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = logical(*position, scale_factor);
                self.last_cursor = Some((x, y));
                Some(PointerInput::Move { x, y })
            }
            WindowEvent::CursorLeft { .. } => {
                self.last_cursor = None;
                None
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.last_cursor.map(|(x, y)| PointerInput::Click { x, y }),
            WindowEvent::Touch(Touch {
                phase, location, ..
            }) => {
                let (x, y) = logical(*location, scale_factor);
                match phase {
                    TouchPhase::Started => Some(PointerInput::Click { x, y }),
                    TouchPhase::Moved => Some(PointerInput::Move { x, y }),
                    TouchPhase::Ended | TouchPhase::Cancelled => None,
                }
            }
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.last_cursor = None;
    }
}

fn logical(position: PhysicalPosition<f64>, scale_factor: f64) -> (f32, f32) {
    let position: LogicalPosition<f32> = position.to_logical(scale_factor);
    (position.x, position.y)
}
