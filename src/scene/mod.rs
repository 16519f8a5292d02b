// Copyright 2025 the Curvesketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Scene - owns every curve and the single active selection
//!
//! The scene is the only place curves are added, removed or selected. At
//! most one curve carries the selected flag, and when one does, its
//! position is `selected`.

mod hit_testing;

use crate::curve::{Curve, RenderGeometry};
use crate::error::CurveError;
use kurbo::Point;

/// The collection of curves being edited
#[derive(Debug, Clone, Default)]
pub struct Scene {
    curves: Vec<Curve>,

    /// Index of the active curve, always in range when `Some`
    selected: Option<usize>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn get(&self, index: usize) -> Option<&Curve> {
        self.curves.get(index)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_curve(&self) -> Option<&Curve> {
        self.selected.and_then(|i| self.curves.get(i))
    }

    /// Take ownership of `curve` and make it the only selected curve
    pub fn add_curve(&mut self, curve: Curve) -> usize {
        tracing::info!("Adding {} curve {}", curve.kind(), curve.id());
        self.curves.push(curve);
        let index = self.curves.len() - 1;
        self.set_selection(Some(index));
        index
    }

    /// Drop the selected curve. Nothing is selected afterwards.
    pub fn remove_selected(&mut self) -> Result<Curve, CurveError> {
        let index = self.selected.ok_or(CurveError::EmptyScene)?;
        self.set_selection(None);
        let mut curve = self.curves.remove(index);
        curve.deselect();
        tracing::info!("Removed {} curve {}", curve.kind(), curve.id());
        Ok(curve)
    }

    /// Remove every curve with fewer than two control points.
    ///
    /// Surviving curves keep their relative order. If the selected curve
    /// survives, the selection follows it to its new index.
    pub fn prune_degenerate_curves(&mut self) -> usize {
        let before = self.curves.len();
        let selected_id = self.selected_curve().map(Curve::id);

        self.curves.retain(|curve| !curve.is_degenerate());

        let removed = before - self.curves.len();
        if removed > 0 {
            let selected = selected_id
                .and_then(|id| self.curves.iter().position(|curve| curve.id() == id));
            self.set_selection(selected);
            tracing::debug!("Pruned {} degenerate curve(s)", removed);
        }
        removed
    }

    /// Advance the selection to the next curve, wrapping to the first
    pub fn select_next(&mut self) {
        if self.curves.is_empty() {
            return;
        }
        let next = match self.selected {
            Some(i) => (i + 1) % self.curves.len(),
            None => 0,
        };
        self.set_selection(Some(next));
    }

    /// Select the curve at `index`; an invalid index leaves the selection
    /// as it was
    pub fn select_by_index(&mut self, index: usize) -> Result<(), CurveError> {
        CurveError::check_index(index, self.curves.len())?;
        self.set_selection(Some(index));
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.set_selection(None);
    }

    /// Append a control point to the selected curve
    pub fn add_control_point_to_selected(&mut self, point: Point) -> Result<usize, CurveError> {
        let curve = self.selected_curve_mut()?;
        Ok(curve.add_control_point(point))
    }

    /// Append a control point to the most recently added curve
    pub fn add_control_point_to_last(&mut self, point: Point) -> Result<usize, CurveError> {
        let curve = self.curves.last_mut().ok_or(CurveError::EmptyScene)?;
        Ok(curve.add_control_point(point))
    }

    /// Remove a control point from the selected curve
    pub fn remove_control_point_from_selected(
        &mut self,
        index: usize,
    ) -> Result<Point, CurveError> {
        self.selected_curve_mut()?.remove_control_point(index)
    }

    /// Render snapshots for every curve, in scene order
    pub fn render(&self) -> Vec<RenderGeometry> {
        self.curves.iter().map(Curve::render_geometry).collect()
    }

    fn selected_curve_mut(&mut self) -> Result<&mut Curve, CurveError> {
        let index = self.selected.ok_or(CurveError::EmptyScene)?;
        self.curves.get_mut(index).ok_or(CurveError::EmptyScene)
    }

    /// Single place the selected flags are written
    fn set_selection(&mut self, selected: Option<usize>) {
        for (i, curve) in self.curves.iter_mut().enumerate() {
            if Some(i) == selected {
                curve.select();
            } else {
                curve.deselect();
            }
        }
        self.selected = selected;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::CurveKind;

    fn curve(kind: CurveKind, n: usize) -> Curve {
        Curve::from_points(kind, (0..n).map(|i| Point::new(i as f64 * 0.1, 0.0)))
    }

    /// At most one selected flag, and it sits at `selected_index`
    fn assert_selection_invariant(scene: &Scene) {
        let flagged: Vec<usize> = scene
            .curves()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_selected())
            .map(|(i, _)| i)
            .collect();
        assert!(flagged.len() <= 1, "several curves selected: {flagged:?}");
        match scene.selected_index() {
            Some(i) => {
                assert!(i < scene.len());
                assert_eq!(flagged, vec![i]);
            }
            None => assert!(flagged.is_empty()),
        }
    }

    #[test]
    fn add_curve_selects_it() {
        let mut scene = Scene::new();
        assert_eq!(scene.add_curve(curve(CurveKind::Polyline, 2)), 0);
        assert_eq!(scene.add_curve(curve(CurveKind::Bezier, 2)), 1);
        assert_eq!(scene.selected_index(), Some(1));
        assert!(!scene.curves()[0].is_selected());
        assert_selection_invariant(&scene);
    }

    #[test]
    fn select_next_cycles() {
        let mut scene = Scene::new();
        for kind in [CurveKind::Polyline, CurveKind::Bezier, CurveKind::Lagrange] {
            scene.add_curve(curve(kind, 3));
        }
        assert_eq!(scene.selected_index(), Some(2));

        let mut seen = Vec::new();
        for _ in 0..4 {
            scene.select_next();
            assert_selection_invariant(&scene);
            seen.push(scene.selected_index().unwrap());
        }
        assert_eq!(seen, vec![0, 1, 2, 0]);
    }

    #[test]
    fn select_next_on_empty_scene_is_noop() {
        let mut scene = Scene::new();
        scene.select_next();
        assert_eq!(scene.selected_index(), None);
    }

    #[test]
    fn select_next_after_clear_starts_at_zero() {
        let mut scene = Scene::new();
        scene.add_curve(curve(CurveKind::Bezier, 2));
        scene.add_curve(curve(CurveKind::Bezier, 2));
        scene.clear_selection();
        assert_selection_invariant(&scene);
        scene.select_next();
        assert_eq!(scene.selected_index(), Some(0));
    }

    #[test]
    fn select_by_index_validates() {
        let mut scene = Scene::new();
        scene.add_curve(curve(CurveKind::Bezier, 2));
        scene.add_curve(curve(CurveKind::Bezier, 2));

        assert_eq!(scene.select_by_index(0), Ok(()));
        assert_eq!(scene.selected_index(), Some(0));

        assert_eq!(
            scene.select_by_index(2),
            Err(CurveError::InvalidIndex { index: 2, len: 2 })
        );
        assert_eq!(scene.selected_index(), Some(0));
        assert_selection_invariant(&scene);
    }

    #[test]
    fn remove_selected_clears_selection() {
        let mut scene = Scene::new();
        scene.add_curve(curve(CurveKind::Polyline, 2));
        let second = scene.add_curve(curve(CurveKind::Lagrange, 3));
        let removed = scene.remove_selected().unwrap();

        assert_eq!(removed.kind(), CurveKind::Lagrange);
        assert!(!removed.is_selected());
        assert_eq!(scene.len(), second);
        assert_eq!(scene.selected_index(), None);
        assert_selection_invariant(&scene);

        assert_eq!(scene.remove_selected().unwrap_err(), CurveError::EmptyScene);
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn prune_removes_only_degenerate_curves_in_order() {
        let mut scene = Scene::new();
        let kinds = [
            (CurveKind::Polyline, 1),
            (CurveKind::Bezier, 3),
            (CurveKind::Lagrange, 0),
            (CurveKind::Lagrange, 1),
            (CurveKind::Polyline, 2),
            (CurveKind::Bezier, 1),
        ];
        for (kind, n) in kinds {
            scene.add_curve(curve(kind, n));
        }
        let survivors: Vec<_> = scene
            .curves()
            .iter()
            .filter(|c| c.control_point_count() >= 2)
            .map(Curve::id)
            .collect();

        assert_eq!(scene.prune_degenerate_curves(), 4);
        let ids: Vec<_> = scene.curves().iter().map(Curve::id).collect();
        assert_eq!(ids, survivors);
        assert_selection_invariant(&scene);
    }

    #[test]
    fn prune_keeps_selection_on_surviving_curve() {
        let mut scene = Scene::new();
        scene.add_curve(curve(CurveKind::Polyline, 1));
        scene.add_curve(curve(CurveKind::Bezier, 1));
        let keep = scene.add_curve(curve(CurveKind::Lagrange, 4));
        let id = scene.curves()[keep].id();

        scene.prune_degenerate_curves();

        assert_eq!(scene.selected_index(), Some(0));
        assert_eq!(scene.selected_curve().map(Curve::id), Some(id));
        assert_selection_invariant(&scene);
    }

    #[test]
    fn prune_drops_selection_with_its_curve() {
        let mut scene = Scene::new();
        scene.add_curve(curve(CurveKind::Polyline, 3));
        scene.add_curve(curve(CurveKind::Polyline, 1));
        scene.prune_degenerate_curves();
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.selected_index(), None);
        assert_selection_invariant(&scene);
    }

    #[test]
    fn control_point_edits_need_a_curve() {
        let mut scene = Scene::new();
        assert_eq!(
            scene.add_control_point_to_selected(Point::ZERO),
            Err(CurveError::EmptyScene)
        );
        assert_eq!(
            scene.add_control_point_to_last(Point::ZERO),
            Err(CurveError::EmptyScene)
        );
        assert_eq!(
            scene.remove_control_point_from_selected(0),
            Err(CurveError::EmptyScene)
        );
    }

    #[test]
    fn control_points_go_to_the_right_curve() {
        let mut scene = Scene::new();
        scene.add_curve(curve(CurveKind::Bezier, 2));
        scene.add_curve(curve(CurveKind::Polyline, 2));
        scene.select_by_index(0).unwrap();

        assert_eq!(scene.add_control_point_to_selected(Point::new(0.5, 0.5)), Ok(2));
        assert_eq!(scene.add_control_point_to_last(Point::new(0.7, 0.7)), Ok(2));
        assert_eq!(scene.curves()[0].control_point_count(), 3);
        assert_eq!(scene.curves()[1].control_point_count(), 3);

        assert_eq!(
            scene.remove_control_point_from_selected(2),
            Ok(Point::new(0.5, 0.5))
        );
        assert_eq!(
            scene.remove_control_point_from_selected(9),
            Err(CurveError::InvalidIndex { index: 9, len: 2 })
        );
    }

    #[test]
    fn mixed_operations_keep_invariant() {
        let mut scene = Scene::new();
        for step in 0..40usize {
            match step % 7 {
                0 | 3 => {
                    scene.add_curve(curve(CurveKind::Bezier, step % 3));
                }
                1 => scene.select_next(),
                2 => {
                    let _ = scene.select_by_index(step % 4);
                }
                4 => {
                    let _ = scene.remove_selected();
                }
                5 => {
                    scene.prune_degenerate_curves();
                }
                _ => scene.select_next(),
            }
            assert_selection_invariant(&scene);
        }
    }

    #[test]
    fn render_returns_one_geometry_per_curve() {
        let mut scene = Scene::new();
        scene.add_curve(curve(CurveKind::Polyline, 3));
        scene.add_curve(curve(CurveKind::Bezier, 3));
        let frame = scene.render();
        assert_eq!(frame.len(), 2);
        assert!(!frame[0].selected);
        assert!(frame[1].selected);
    }
}
