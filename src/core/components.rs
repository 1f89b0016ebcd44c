//! Core domain: lifecycle components shared across actor kinds.

use bevy::prelude::*;

/// Two-phase removal: reactions disable an actor's body synchronously and
/// attach this marker; the end-of-tick sweep despawns the entity. Presentation
/// reads the marker to play a removal effect before the sweep fires.
#[derive(Component, Debug, Default)]
pub struct Doomed;
