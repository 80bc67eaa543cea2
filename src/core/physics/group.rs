//=========================================================================
// Sprite Group
//=========================================================================
//
// Ordered collection of sprites sharing one body kind. Member indices are
// stable: sprites are deactivated, never removed, so the index a collider
// reports keeps naming the same sprite.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::sprite::Sprite;

//=== Group ===============================================================

#[derive(Debug, Clone, Default)]
pub struct Group {
    members: Vec<Sprite>,
    is_static: bool,
}

impl Group {
    /// Group of dynamic sprites.
    pub fn new() -> Self {
        Self::default()
    }

    /// Group whose members are immovable and ignore gravity.
    pub fn new_static() -> Self {
        Self {
            members: Vec::new(),
            is_static: true,
        }
    }

    //--- Membership -------------------------------------------------------

    /// Adds a sprite centred on `(x, y)` and returns it for configuration.
    pub fn create(&mut self, x: f32, y: f32, frame_size: Vec2) -> &mut Sprite {
        let sprite = if self.is_static {
            Sprite::new_static(x, y, frame_size)
        } else {
            Sprite::new(x, y, frame_size)
        };
        let index = self.members.len();
        self.members.push(sprite);
        &mut self.members[index]
    }

    /// Adds `count` sprites starting at `(x, y)`, each `step_x` further
    /// right. Returns the index range of the new members.
    pub fn create_multiple(
        &mut self,
        count: usize,
        x: f32,
        y: f32,
        step_x: f32,
        frame_size: Vec2,
    ) -> std::ops::Range<usize> {
        let start = self.members.len();
        for i in 0..count {
            self.create(x + step_x * i as f32, y, frame_size);
        }
        start..self.members.len()
    }

    //--- Queries ----------------------------------------------------------

    /// Number of members whose `active` flag equals `active`.
    pub fn count_active(&self, active: bool) -> usize {
        self.members.iter().filter(|s| s.active == active).count()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Sprite> {
        self.members.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Sprite> {
        self.members.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sprite> {
        self.members.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Sprite> {
        self.members.iter_mut()
    }

    pub(super) fn members_mut(&mut self) -> &mut [Sprite] {
        &mut self.members
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const STAR: Vec2 = Vec2::new(24.0, 22.0);

    #[test]
    fn create_multiple_spaces_members() {
        let mut stars = Group::new();
        let range = stars.create_multiple(12, 12.0, 0.0, 70.0, STAR);

        assert_eq!(range, 0..12);
        assert_eq!(stars.len(), 12);
        assert_eq!(stars.get(0).map(|s| s.x()), Some(12.0));
        assert_eq!(stars.get(11).map(|s| s.x()), Some(782.0));
    }

    #[test]
    fn static_group_creates_immovable_members() {
        let mut platforms = Group::new_static();
        let ledge = platforms.create(600.0, 400.0, Vec2::new(400.0, 32.0));
        assert!(ledge.body.immovable);
        assert!(!ledge.body.allow_gravity);
        assert!(platforms.is_static);
    }

    #[test]
    fn count_active_tracks_disabled_members() {
        let mut stars = Group::new();
        stars.create_multiple(3, 0.0, 0.0, 10.0, STAR);
        assert_eq!(stars.count_active(true), 3);

        if let Some(star) = stars.get_mut(1) {
            star.disable_body(true, true);
        }
        assert_eq!(stars.count_active(true), 2);
        assert_eq!(stars.count_active(false), 1);
    }

    #[test]
    fn empty_group() {
        let group = Group::new();
        assert!(group.is_empty());
        assert_eq!(group.count_active(true), 0);
        assert!(group.get(0).is_none());
    }
}
