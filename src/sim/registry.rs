//! World-object registry: spawn-or-reuse and off-screen culling
//!
//! Per kind, the registry owns an active set and hands recycling off to the
//! pool. Release sites are explicit: culling and coin collection move
//! objects out of the active set themselves, with no callback indirection.

use glam::Vec2;

use super::state::{GameState, ObjectKind, WorldObject};

impl GameState {
    /// Reactivate a pooled instance of `kind` at `pos`, or construct a fresh
    /// one if the pool is empty. Returns the object's id.
    ///
    /// A reused instance is repositioned, resized, and reactivated but keeps
    /// the scroll velocity it had when it was culled; `fresh_velocity_x` is
    /// the kind default applied only on fresh construction.
    pub(crate) fn spawn_or_reuse(
        &mut self,
        kind: ObjectKind,
        pos: Vec2,
        width: f32,
        fresh_velocity_x: f32,
    ) -> u32 {
        let reused = self.pool_mut(kind).acquire();
        match reused {
            Some(mut obj) => {
                obj.pos = pos;
                obj.width = width;
                obj.active = true;
                obj.fade_ticks = None;
                let id = obj.id;
                log::debug!("reusing pooled {kind:?} {id} at {pos}");
                self.active_mut(kind).push(obj);
                id
            }
            None => {
                let id = self.next_entity_id();
                let obj = WorldObject::new(id, kind, pos, width, fresh_velocity_x);
                log::debug!("constructing fresh {kind:?} {id} at {pos}");
                self.active_mut(kind).push(obj);
                id
            }
        }
    }

    /// Release every active object whose right edge has crossed the left
    /// world boundary back into its pool. Run once per tick per kind.
    pub(crate) fn cull_offscreen(&mut self) {
        for kind in [ObjectKind::Platform, ObjectKind::Coin, ObjectKind::Fire] {
            let mut i = 0;
            while i < self.active_mut(kind).len() {
                if self.active_mut(kind)[i].is_offscreen_left() {
                    let obj = self.active_mut(kind).swap_remove(i);
                    log::debug!("culling {kind:?} {} at x={}", obj.id, obj.pos.x);
                    self.pool_mut(kind).release(obj);
                } else {
                    i += 1;
                }
            }
        }
    }
}
