//! A list of saved colors ("points") with a selection and optional
//! interpolation between the points the user created.
//!
//! Every point holds its RGB value as the source of truth. Whenever that
//! value changes the HLS and HSV views of the point are derived again through
//! the point's own [`Hues`] memories, so the views are always consistent with
//! the RGB value and keep their hue across achromatic states.

use bitflags::bitflags;

use crate::{
    config::PaletteConfig,
    error::PaletteError,
    geometry::{self, Position},
    hue::Hues,
    interpolate::spaced,
    models::{Hls, Hsv, Rgb},
};

/// Interpolation needs at least this many base points.
pub const MIN_INTERPOLATION_POINTS: usize = 2;

/// Identifies a point in a [`Palette`]. Ids are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(u64);

impl std::fmt::Display for PointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "point-{}", self.0)
    }
}

bitflags! {
    /// Flags describing how a [`SavedColor`] came to be.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct PointFlags : u8 {
        /// Set when the point was produced by interpolating between two base
        /// points. Such points are read-only.
        const INTERPOLATED = 1 << 0;
    }
}

/// A color saved in a palette, along with its derived views.
#[derive(Clone, Debug, PartialEq)]
pub struct SavedColor {
    id: PointId,
    rgb: Rgb,
    flags: PointFlags,
    hues: Hues,
    hls: Hls,
    hsv: Hsv,
}

impl SavedColor {
    fn new(id: PointId, rgb: Rgb, flags: PointFlags, hues: Hues) -> Self {
        let mut color = Self {
            id,
            rgb: rgb.clamped(),
            flags,
            hues,
            hls: Hls::new(0.0, 0.0, 0.0),
            hsv: Hsv::new(0.0, 0.0, 0.0),
        };
        color.derive();
        color
    }

    fn derive(&mut self) {
        let (hls, hsv) = self.hues.derive(&self.rgb);
        self.hls = hls;
        self.hsv = hsv;
    }

    fn set_rgb(&mut self, rgb: Rgb) {
        self.rgb = rgb.clamped();
        self.derive();
    }

    /// The id of this point.
    pub fn id(&self) -> PointId {
        self.id
    }

    /// The RGB value of this point, clamped to [0, 255].
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// The HLS view of this point.
    pub fn hls(&self) -> Hls {
        self.hls
    }

    /// The HSV view of this point.
    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// The hue memories of this point.
    pub fn hues(&self) -> Hues {
        self.hues
    }

    /// The flags of this point.
    pub fn flags(&self) -> PointFlags {
        self.flags
    }

    /// Returns true if this point was produced by interpolation.
    pub fn is_interpolated(&self) -> bool {
        self.flags.contains(PointFlags::INTERPOLATED)
    }

    /// Where this point sits in the RGB cube.
    pub fn cube_position(&self) -> Position {
        geometry::rgb_cube_position(&self.rgb)
    }

    /// Where this point sits in the HLS double cone.
    pub fn diamond_position(&self) -> Position {
        geometry::hls_diamond_position(&self.hls)
    }

    /// Where this point sits in the HSV cone.
    pub fn cone_position(&self) -> Position {
        geometry::hsv_cone_position(&self.hsv)
    }
}

/// A change made to a point through one of the color models.
#[derive(Clone, Debug, PartialEq)]
pub enum Edit {
    /// Replace the RGB value.
    Rgb(Rgb),
    /// Set the color through the HLS notation.
    Hls(Hls),
    /// Set the color through the HSV notation.
    Hsv(Hsv),
    /// Set the color from a `#rrggbb` string.
    Hex(String),
}

/// An ordered list of saved colors with one of them selected.
#[derive(Clone, Debug)]
pub struct Palette {
    colors: Vec<SavedColor>,
    selected: PointId,
    next_id: u64,
    interpolation_steps: Option<usize>,
    config: PaletteConfig,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(PaletteConfig::default())
    }
}

impl Palette {
    /// Create a palette holding a single point with the configured default
    /// color.
    pub fn new(config: PaletteConfig) -> Self {
        let first = SavedColor::new(
            PointId(0),
            config.default_rgb,
            PointFlags::empty(),
            Hues::default(),
        );
        Self {
            selected: first.id,
            colors: vec![first],
            next_id: 1,
            interpolation_steps: None,
            config,
        }
    }

    /// The configuration of this palette.
    pub fn config(&self) -> &PaletteConfig {
        &self.config
    }

    fn allocate_id(&mut self) -> PointId {
        let id = PointId(self.next_id);
        self.next_id += 1;
        id
    }

    fn index_of(&self, id: PointId) -> Result<usize, PaletteError> {
        self.colors
            .iter()
            .position(|c| c.id == id)
            .ok_or(PaletteError::UnknownPoint(id))
    }

    /// Like [`Self::index_of`], but fails for interpolated points.
    fn index_of_base(&self, id: PointId) -> Result<usize, PaletteError> {
        let index = self.index_of(id)?;
        if self.colors[index].is_interpolated() {
            log::warn!("Rejected change to interpolated point {}", id);
            return Err(PaletteError::ReadOnly(id));
        }
        Ok(index)
    }

    /// Number of points, interpolated ones included.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// A palette always holds at least one point.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Number of points that were not produced by interpolation.
    pub fn base_count(&self) -> usize {
        self.colors.iter().filter(|c| !c.is_interpolated()).count()
    }

    /// Iterate over all points in order.
    pub fn iter(&self) -> impl Iterator<Item = &SavedColor> {
        self.colors.iter()
    }

    /// Iterate over the points produced by interpolation.
    pub fn interpolated(&self) -> impl Iterator<Item = &SavedColor> {
        self.colors.iter().filter(|c| c.is_interpolated())
    }

    /// Look up a point by id.
    pub fn get(&self, id: PointId) -> Option<&SavedColor> {
        self.colors.iter().find(|c| c.id == id)
    }

    /// The selected point.
    pub fn selected(&self) -> &SavedColor {
        // The selection is kept valid by every mutation.
        self.get(self.selected).unwrap_or(&self.colors[0])
    }

    /// Select a point.
    pub fn select(&mut self, id: PointId) -> Result<(), PaletteError> {
        self.index_of(id)?;
        self.selected = id;
        Ok(())
    }

    fn ensure_selection(&mut self) {
        if self.get(self.selected).is_none() {
            self.selected = self.colors[0].id;
            log::debug!("Selection moved to {}", self.selected);
        }
    }

    /// Add a new base point with the given color and select it.
    pub fn add_point(&mut self, rgb: Rgb) -> PointId {
        let id = self.allocate_id();
        self.colors
            .push(SavedColor::new(id, rgb, PointFlags::empty(), Hues::default()));
        self.selected = id;
        log::debug!("Added {} with color {}", id, rgb);
        self.regenerate();
        id
    }

    /// Add a new base point with the configured default color and select it.
    pub fn add_default_point(&mut self) -> PointId {
        self.add_point(self.config.default_rgb)
    }

    /// Copy a base point into a new, independent point placed right after
    /// it. The copy is selected.
    pub fn duplicate(&mut self, id: PointId) -> Result<PointId, PaletteError> {
        let index = self.index_of_base(id)?;
        let rgb = self.colors[index].rgb;

        let copy = self.allocate_id();
        self.colors.insert(
            index + 1,
            SavedColor::new(copy, rgb, PointFlags::empty(), Hues::default()),
        );
        self.selected = copy;
        log::debug!("Duplicated {} into {}", id, copy);
        self.regenerate();
        Ok(copy)
    }

    /// Remove a base point. Interpolation is turned off when fewer than
    /// [`MIN_INTERPOLATION_POINTS`] base points remain.
    pub fn remove(&mut self, id: PointId) -> Result<(), PaletteError> {
        let index = self.index_of_base(id)?;
        if self.base_count() <= 1 {
            return Err(PaletteError::LastPoint);
        }

        self.colors.remove(index);
        log::debug!("Removed {}", id);

        if self.interpolation_steps.is_some() {
            if self.base_count() < MIN_INTERPOLATION_POINTS {
                self.disable_interpolation();
            } else {
                self.regenerate();
            }
        }

        self.ensure_selection();
        Ok(())
    }

    /// Change the color of a base point through any of the models, then
    /// derive its views again.
    pub fn edit(&mut self, id: PointId, edit: Edit) -> Result<&SavedColor, PaletteError> {
        let index = self.index_of_base(id)?;
        let color = &mut self.colors[index];

        match edit {
            Edit::Rgb(rgb) => color.set_rgb(rgb),
            Edit::Hls(hls) => {
                color.hues.seed(hls.hue);
                color.set_rgb(hls.to_rgb());
            }
            Edit::Hsv(hsv) => {
                color.hues.seed(hsv.hue);
                color.set_rgb(hsv.to_rgb());
            }
            Edit::Hex(hex) => color.set_rgb(Rgb::from_hex(&hex)?),
        }
        log::debug!("Edited {} to {}", id, color.rgb);

        self.regenerate();
        self.get(id).ok_or(PaletteError::UnknownPoint(id))
    }

    /// Change the color of the selected point.
    pub fn edit_selected(&mut self, edit: Edit) -> Result<&SavedColor, PaletteError> {
        self.edit(self.selected, edit)
    }

    /// Returns true if interpolated points are being generated.
    pub fn is_interpolating(&self) -> bool {
        self.interpolation_steps.is_some()
    }

    /// Generate `steps - 2` interpolated points between every pair of
    /// consecutive base points. They are kept up to date until
    /// interpolation is disabled.
    pub fn enable_interpolation(&mut self, steps: usize) -> Result<(), PaletteError> {
        if steps < 2 {
            return Err(PaletteError::InvalidSteps(steps));
        }
        let found = self.base_count();
        if found < MIN_INTERPOLATION_POINTS {
            log::warn!("Can not interpolate between {} point(s)", found);
            return Err(PaletteError::NotEnoughPoints {
                required: MIN_INTERPOLATION_POINTS,
                found,
            });
        }

        self.interpolation_steps = Some(steps);
        self.regenerate();
        Ok(())
    }

    /// Like [`Self::enable_interpolation`] with the number of steps from the
    /// palette's configuration.
    pub fn enable_configured_interpolation(&mut self) -> Result<(), PaletteError> {
        self.enable_interpolation(self.config.interpolation_steps)
    }

    /// Stop interpolating and remove every interpolated point.
    pub fn disable_interpolation(&mut self) {
        self.interpolation_steps = None;
        self.colors.retain(|c| !c.is_interpolated());
        log::debug!("Interpolation disabled");
        self.ensure_selection();
    }

    /// Recompute every interpolated point from the current base points. A
    /// segment that keeps its number of points keeps its ids.
    fn regenerate(&mut self) {
        let Some(steps) = self.interpolation_steps else {
            return;
        };
        let space = self.config.interpolation_space;

        // Ids of the interpolated points following each base point.
        let mut segments: Vec<Vec<PointId>> = Vec::new();
        for color in &self.colors {
            if !color.is_interpolated() {
                segments.push(Vec::new());
            } else if let Some(segment) = segments.last_mut() {
                segment.push(color.id);
            }
        }

        let bases: Vec<SavedColor> = self
            .colors
            .drain(..)
            .filter(|c| !c.is_interpolated())
            .collect();

        let mut colors = Vec::with_capacity(bases.len() * steps);
        for (i, base) in bases.iter().enumerate() {
            colors.push(base.clone());

            let Some(next) = bases.get(i + 1) else {
                continue;
            };
            let reused = segments
                .get(i)
                .filter(|ids| ids.len() == steps - 2)
                .map(|ids| ids.as_slice());

            let points = spaced(&base.rgb, &next.rgb, steps, 1..steps - 1, space);
            for (j, rgb) in points.enumerate() {
                let id = match reused {
                    Some(ids) => ids[j],
                    None => self.allocate_id(),
                };
                colors.push(SavedColor::new(
                    id,
                    rgb,
                    PointFlags::INTERPOLATED,
                    Hues::default(),
                ));
            }
        }

        self.colors = colors;
        log::debug!(
            "Regenerated {} interpolated point(s) in {:?}",
            self.colors.len() - bases.len(),
            space
        );
        self.ensure_selection();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, interpolate::InterpolationSpace};

    fn black_and_white() -> (Palette, PointId, PointId) {
        let mut palette = Palette::default();
        let black = palette.selected().id();
        palette.edit(black, Edit::Rgb(Rgb::BLACK)).unwrap();
        let white = palette.add_point(Rgb::WHITE);
        (palette, black, white)
    }

    #[test]
    fn starts_with_default_point_selected() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 1);
        assert_eq!(palette.selected().rgb(), Rgb::new(127.0, 127.0, 127.0));
        assert!(!palette.selected().is_interpolated());
        assert!(!palette.is_interpolating());
    }

    #[test]
    fn edits_derive_views() {
        let mut palette = Palette::default();
        let id = palette.selected().id();

        let color = palette.edit(id, Edit::Rgb(Rgb::new(0.0, 0.0, 255.0))).unwrap();
        assert_component_eq!(color.hls().hue, 240.0);
        assert_component_eq!(color.hsv().hue, 240.0);
        assert_component_eq!(color.hsv().value, 100.0);

        let color = palette.edit(id, Edit::Hex("#00ff00".to_string())).unwrap();
        assert_eq!(color.rgb(), Rgb::new(0.0, 255.0, 0.0));
        assert_component_eq!(color.hls().hue, 120.0);
    }

    #[test]
    fn hue_is_kept_while_dragging_to_gray() {
        let mut palette = Palette::default();
        let id = palette.selected().id();

        palette
            .edit(id, Edit::Hls(Hls::new(200.0, 50.0, 80.0)))
            .unwrap();
        let color = palette.edit(id, Edit::Hls(Hls::new(200.0, 50.0, 0.0))).unwrap();
        assert_eq!(color.hls().saturation, 0.0);
        assert_component_eq!(color.hls().hue, 200.0);
        assert_component_eq!(color.hsv().hue, 200.0);

        let color = palette.edit(id, Edit::Hsv(Hsv::new(200.0, 80.0, 0.0))).unwrap();
        assert_eq!(color.rgb(), Rgb::BLACK);
        assert_component_eq!(color.hsv().hue, 200.0);
        assert_component_eq!(color.hls().hue, 200.0);
    }

    #[test]
    fn hue_edit_of_gray_sticks() {
        let mut palette = Palette::default();
        let id = palette.selected().id();

        let color = palette.edit(id, Edit::Hls(Hls::new(75.0, 40.0, 0.0))).unwrap();
        assert!(color.rgb().is_gray());
        assert_eq!(color.hls().hue, 75.0);
        assert_eq!(color.hsv().hue, 75.0);
    }

    #[test]
    fn points_have_their_own_hue_memory() {
        let mut palette = Palette::default();
        let first = palette.selected().id();
        palette.edit(first, Edit::Rgb(Rgb::new(255.0, 0.0, 0.0))).unwrap();
        palette.edit(first, Edit::Rgb(Rgb::new(10.0, 10.0, 10.0))).unwrap();

        let second = palette.add_point(Rgb::new(0.0, 0.0, 255.0));
        palette.edit(second, Edit::Rgb(Rgb::new(10.0, 10.0, 10.0))).unwrap();

        assert_component_eq!(palette.get(first).unwrap().hls().hue, 0.0);
        assert_component_eq!(palette.get(second).unwrap().hls().hue, 240.0);
    }

    #[test]
    fn black_to_white_interpolation() {
        let (mut palette, black, white) = black_and_white();
        palette.enable_interpolation(10).unwrap();

        let ids: Vec<_> = palette.iter().map(|c| c.id()).collect();
        assert_eq!(ids.len(), 10);
        assert_eq!(ids[0], black);
        assert_eq!(ids[9], white);

        let ramp: Vec<_> = palette.interpolated().map(|c| c.rgb()).collect();
        assert_eq!(ramp.len(), 8);
        let mut previous = 0.0;
        for rgb in ramp {
            assert!(rgb.is_gray(), "{:?}", rgb);
            assert!(rgb.red > previous);
            assert!(rgb.red < 255.0);
            previous = rgb.red;
        }
    }

    #[test]
    fn interpolation_in_hsv_space() {
        let config = PaletteConfig {
            interpolation_space: InterpolationSpace::Hsv,
            default_rgb: Rgb::new(255.0, 0.0, 0.0),
            ..Default::default()
        };
        let mut palette = Palette::new(config);
        palette.add_point(Rgb::new(0.0, 0.0, 255.0));
        palette.enable_interpolation(3).unwrap();

        let middle: Vec<_> = palette.interpolated().map(|c| c.rgb().to_bytes()).collect();
        assert_eq!(middle, vec![[255, 0, 255]]);
    }

    #[test]
    fn interpolated_points_are_read_only() {
        let (mut palette, _, _) = black_and_white();
        palette.enable_interpolation(4).unwrap();
        let id = palette.interpolated().next().unwrap().id();

        assert_eq!(
            palette.edit(id, Edit::Rgb(Rgb::WHITE)).unwrap_err(),
            PaletteError::ReadOnly(id)
        );
        assert_eq!(palette.duplicate(id).unwrap_err(), PaletteError::ReadOnly(id));
        assert_eq!(palette.remove(id).unwrap_err(), PaletteError::ReadOnly(id));

        // Interpolated points can still be selected.
        palette.select(id).unwrap();
        assert_eq!(palette.selected().id(), id);
    }

    #[test]
    fn editing_a_base_point_regenerates() {
        let (mut palette, black, _) = black_and_white();
        palette.enable_interpolation(3).unwrap();
        let before: Vec<_> = palette.interpolated().map(|c| c.rgb()).collect();
        assert_eq!(before, vec![Rgb::new(127.5, 127.5, 127.5)]);

        palette
            .edit(black, Edit::Rgb(Rgb::new(255.0, 255.0, 255.0)))
            .unwrap();
        let after: Vec<_> = palette.interpolated().map(|c| c.rgb()).collect();
        assert_eq!(after, vec![Rgb::WHITE]);
    }

    #[test]
    fn interpolation_needs_two_points() {
        let mut palette = Palette::default();
        assert_eq!(
            palette.enable_interpolation(10),
            Err(PaletteError::NotEnoughPoints {
                required: 2,
                found: 1
            })
        );
        palette.add_default_point();
        assert_eq!(
            palette.enable_interpolation(1),
            Err(PaletteError::InvalidSteps(1))
        );
        assert!(palette.enable_interpolation(2).is_ok());
        assert_eq!(palette.interpolated().count(), 0);
    }

    #[test]
    fn duplicate_is_independent() {
        let mut palette = Palette::default();
        let original = palette.selected().id();
        palette
            .edit(original, Edit::Rgb(Rgb::new(10.0, 20.0, 30.0)))
            .unwrap();

        let copy = palette.duplicate(original).unwrap();
        assert_ne!(copy, original);
        assert_eq!(palette.selected().id(), copy);
        assert_eq!(palette.get(copy).unwrap().rgb(), Rgb::new(10.0, 20.0, 30.0));

        palette.edit(copy, Edit::Rgb(Rgb::WHITE)).unwrap();
        assert_eq!(
            palette.get(original).unwrap().rgb(),
            Rgb::new(10.0, 20.0, 30.0)
        );
        assert_eq!(palette.get(copy).unwrap().rgb(), Rgb::WHITE);
    }

    #[test]
    fn duplicate_starts_with_fresh_hue_memory() {
        let mut palette = Palette::default();
        let original = palette.selected().id();
        palette
            .edit(original, Edit::Hsv(Hsv::new(210.0, 0.0, 50.0)))
            .unwrap();

        let copy = palette.duplicate(original).unwrap();
        let copied = palette.get(copy).unwrap();
        assert_eq!(copied.rgb(), palette.get(original).unwrap().rgb());
        assert_eq!(copied.hls().hue, 0.0);
        assert_eq!(copied.hsv().hue, 0.0);
        assert_eq!(palette.get(original).unwrap().hsv().hue, 210.0);
    }

    #[test]
    fn selected_interpolated_point_survives_base_edits() {
        let (mut palette, black, _) = black_and_white();
        palette.enable_interpolation(10).unwrap();

        let middle = palette.interpolated().nth(3).unwrap().id();
        palette.select(middle).unwrap();
        let before = palette.get(middle).unwrap().rgb();

        palette.edit(black, Edit::Rgb(Rgb::new(0.0, 0.0, 90.0))).unwrap();
        assert_eq!(palette.selected().id(), middle);
        assert_ne!(palette.get(middle).unwrap().rgb(), before);

        // A different number of steps gives the segment new points.
        palette.enable_interpolation(5).unwrap();
        assert!(palette.get(middle).is_none());
        assert_eq!(palette.selected().id(), black);
    }

    #[test]
    fn configured_interpolation_uses_config_steps() {
        let config = PaletteConfig {
            interpolation_steps: 4,
            ..Default::default()
        };
        let mut palette = Palette::new(config);
        palette.add_point(Rgb::WHITE);

        palette.enable_configured_interpolation().unwrap();
        assert_eq!(palette.interpolated().count(), 2);
        assert_eq!(palette.len(), 4);
    }

    #[test]
    fn removing_below_threshold_disables_interpolation() {
        let (mut palette, black, white) = black_and_white();
        palette.enable_interpolation(10).unwrap();
        assert_eq!(palette.len(), 10);

        palette.remove(white).unwrap();
        assert!(!palette.is_interpolating());
        assert_eq!(palette.interpolated().count(), 0);
        assert_eq!(palette.len(), 1);
        assert_eq!(palette.selected().id(), black);

        assert_eq!(palette.remove(black), Err(PaletteError::LastPoint));
    }

    #[test]
    fn removing_with_enough_points_regenerates() {
        let (mut palette, _, white) = black_and_white();
        let red = palette.add_point(Rgb::new(255.0, 0.0, 0.0));
        palette.enable_interpolation(4).unwrap();
        assert_eq!(palette.interpolated().count(), 4);

        palette.remove(white).unwrap();
        assert!(palette.is_interpolating());
        assert_eq!(palette.interpolated().count(), 2);
        assert_eq!(palette.selected().id(), red);
        assert!(palette.get(white).is_none());
    }

    #[test]
    fn disabling_purges_interpolated_points() {
        let (mut palette, _, _) = black_and_white();
        palette.enable_interpolation(5).unwrap();
        let interpolated = palette.interpolated().next().unwrap().id();
        palette.select(interpolated).unwrap();

        palette.disable_interpolation();
        assert_eq!(palette.len(), 2);
        assert!(palette.get(interpolated).is_none());
        assert!(!palette.selected().is_interpolated());
    }

    #[test]
    fn unknown_points() {
        let mut palette = Palette::default();
        let missing = PointId(99);
        assert_eq!(palette.select(missing), Err(PaletteError::UnknownPoint(missing)));
        assert_eq!(palette.remove(missing), Err(PaletteError::UnknownPoint(missing)));
        assert_eq!(
            palette.duplicate(missing),
            Err(PaletteError::UnknownPoint(missing))
        );
    }

    #[test]
    fn bad_hex_is_rejected() {
        let mut palette = Palette::default();
        let id = palette.selected().id();
        let result = palette.edit(id, Edit::Hex("#zz0000".to_string()));
        assert!(matches!(result, Err(PaletteError::Hex(_))));
        assert_eq!(palette.selected().rgb(), Rgb::default());
    }

    #[test]
    fn edits_are_clamped() {
        let mut palette = Palette::default();
        let color = palette
            .edit_selected(Edit::Rgb(Rgb::new(-10.0, 100.0, 400.0)))
            .unwrap();
        assert_eq!(color.rgb(), Rgb::new(0.0, 100.0, 255.0));
    }

    #[test]
    fn positions_follow_views() {
        let mut palette = Palette::default();
        let color = palette.edit_selected(Edit::Rgb(Rgb::WHITE)).unwrap();
        assert_eq!(color.cube_position(), geometry::rgb_cube_position(&Rgb::WHITE));
        assert_component_eq!(color.diamond_position().y, 1.0);
        assert_component_eq!(color.cone_position().y, 0.8);
    }
}
