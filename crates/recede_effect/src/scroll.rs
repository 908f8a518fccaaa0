//! Scroll session state and per-frame geometry
//!
//! Each frame the model walks its active lines bottom-to-top from a
//! shared vertical offset, derives every line's shrink and scale from
//! its distance to the top edge, and hands back draw placements. Lines
//! that cross the exit threshold are marked during the pass and
//! filtered afterwards, never removed mid-iteration. When the block's
//! estimated extent has scrolled above the top the session is done.

/// Base scroll step in pixels per frame, before the speed multiplier
pub const SCROLL_STEP_PX: f32 = 3.0;

/// Estimated rendered-line-height to font-size ratio, used to seed the
/// initial offset so the whole block starts below the surface
pub const LINE_HEIGHT_FACTOR: f32 = 1.23;

/// Lines whose anchor passes this fraction of the surface height
/// (measured from the top) leave the active set
pub const EXIT_THRESHOLD_FACTOR: f32 = 0.2;

/// Strength of the linear shrink curve: a line at the top edge renders
/// at `1.0 - SHRINK_CURVE_STRENGTH` of its original size
pub const SHRINK_CURVE_STRENGTH: f32 = 0.7;

/// Normalized progress of a line toward the top edge, clamped at zero
/// so lines still below the bottom edge do not invert the scale
pub fn shrink_factor(distance_from_top: f32, surface_height: f32) -> f32 {
    (distance_from_top / surface_height).max(0.0)
}

/// Final size multiplier derived from the shrink factor
pub fn scale_factor(shrink: f32) -> f32 {
    1.0 - shrink * SHRINK_CURVE_STRENGTH
}

/// Stable identity of a wrapped line, valid for the whole session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId(pub usize);

/// One wrapped line with its unscaled rendered dimensions
#[derive(Debug, Clone)]
pub struct ScrollLine {
    pub id: LineId,
    pub text: String,
    /// Rendered width at the start font size, in pixels
    pub base_width: f32,
    /// Rendered height at the start font size, in pixels
    pub base_height: f32,
}

/// Fixed parameters of a scroll session
#[derive(Debug, Clone, Copy)]
pub struct ScrollParams {
    pub surface_width: f32,
    pub surface_height: f32,
    pub start_font_size: f32,
    pub line_spacing: f32,
    /// Scroll speed multiplier; 1.0 gives the base 3 px/frame step
    pub speed: f32,
}

impl ScrollParams {
    /// Pixels the block moves up per frame
    pub fn step(&self) -> f32 {
        SCROLL_STEP_PX * self.speed
    }

    /// Offset placing the whole block just below the surface
    pub fn initial_offset(&self, line_count: usize) -> f32 {
        self.surface_height
            + line_count as f32 * (self.start_font_size * LINE_HEIGHT_FACTOR + self.line_spacing)
    }
}

/// Where and how large one line is drawn this frame
#[derive(Debug, Clone, Copy)]
pub struct LinePlacement {
    pub id: LineId,
    pub scale: f32,
    /// Top-left corner of the scaled rect (centered horizontally on
    /// the surface, centered vertically on the line's anchor)
    pub x: f32,
    pub y: f32,
    /// Scaled dimensions
    pub width: f32,
    pub height: f32,
}

/// Mutable per-session scroll state
pub struct ScrollModel {
    params: ScrollParams,
    /// Active lines, first element drawn bottom-most. Shrinks
    /// monotonically as lines exit past the top threshold.
    lines: Vec<ScrollLine>,
    /// Anchor of the first line before per-line layout is applied
    y_position: f32,
    finished: bool,
}

impl ScrollModel {
    /// Build a session from lines in reading order. The sequence is
    /// reversed so the last-read line leads as content scrolls upward
    /// and the first-read line ends up topmost on screen.
    pub fn from_reading_order(mut lines: Vec<ScrollLine>, params: ScrollParams) -> Self {
        lines.reverse();
        let y_position = params.initial_offset(lines.len());
        tracing::info!(
            "scroll session: {} lines, initial offset {:.1}, step {:.1} px/frame",
            lines.len(),
            y_position,
            params.step()
        );
        Self {
            params,
            lines,
            y_position,
            finished: false,
        }
    }

    pub fn y_position(&self) -> f32 {
        self.y_position
    }

    pub fn lines(&self) -> &[ScrollLine] {
        &self.lines
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Compute this frame's placements, drop lines that crossed the
    /// exit threshold, advance the offset and evaluate termination.
    ///
    /// A line crossing the threshold is still placed (and so drawn)
    /// one final time in the frame that removes it.
    pub fn advance_frame(&mut self) -> Vec<LinePlacement> {
        if self.finished {
            return Vec::new();
        }

        let surface_h = self.params.surface_height;
        let exit_y = surface_h * EXIT_THRESHOLD_FACTOR;

        let mut placements = Vec::with_capacity(self.lines.len());
        let mut exited = vec![false; self.lines.len()];
        let mut line_y = self.y_position;

        for (index, line) in self.lines.iter().enumerate() {
            let shrink = shrink_factor(surface_h - line_y, surface_h);
            let scale = scale_factor(shrink);
            let width = line.base_width * scale;
            let height = line.base_height * scale;

            placements.push(LinePlacement {
                id: line.id,
                scale,
                x: (self.params.surface_width - width) / 2.0,
                y: line_y - height / 2.0,
                width,
                height,
            });

            line_y -= height + self.params.line_spacing;
            if line_y <= exit_y {
                exited[index] = true;
            }
        }

        if exited.iter().any(|&e| e) {
            let mut index = 0;
            self.lines.retain(|_| {
                let keep = !exited[index];
                index += 1;
                keep
            });
            tracing::debug!("{} lines active after exit pass", self.lines.len());
        }

        self.y_position -= self.params.step();

        let remaining_extent = self.lines.len() as f32
            * (self.params.start_font_size + self.params.line_spacing);
        if self.lines.is_empty() || self.y_position + remaining_extent < 0.0 {
            self.finished = true;
            tracing::info!("scroll session finished");
        }

        placements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params_800x600() -> ScrollParams {
        ScrollParams {
            surface_width: 800.0,
            surface_height: 600.0,
            start_font_size: 60.0,
            line_spacing: 20.0,
            speed: 1.0,
        }
    }

    fn line(id: usize, text: &str) -> ScrollLine {
        ScrollLine {
            id: LineId(id),
            text: text.to_string(),
            base_width: 400.0,
            base_height: 70.0,
        }
    }

    #[test]
    fn shrink_is_clamped_below_the_surface() {
        // negative distance = line below the bottom edge
        assert_eq!(shrink_factor(-50.0, 600.0), 0.0);
        assert_eq!(shrink_factor(0.0, 600.0), 0.0);
        assert_eq!(shrink_factor(300.0, 600.0), 0.5);
        assert_eq!(shrink_factor(600.0, 600.0), 1.0);
    }

    #[test]
    fn scale_is_full_at_the_bottom_edge() {
        assert_eq!(scale_factor(shrink_factor(0.0, 600.0)), 1.0);
    }

    #[test]
    fn scale_bounds_within_the_surface() {
        for distance in 0..=600 {
            let scale = scale_factor(shrink_factor(distance as f32, 600.0));
            assert!(scale > 0.3 - 1e-5 && scale <= 1.0);
        }
        // at the top edge the scale bottoms out at 30%
        let at_top = scale_factor(shrink_factor(600.0, 600.0));
        assert!((at_top - 0.3).abs() < 1e-6);
    }

    #[test]
    fn shrink_is_monotonic() {
        let mut previous = f32::INFINITY;
        for distance in 0..=600 {
            let scale = scale_factor(shrink_factor(distance as f32, 600.0));
            assert!(scale <= previous);
            previous = scale;
        }
    }

    #[test]
    fn initial_offset_matches_line_count_arithmetic() {
        // 600 + 3 * (60 * 1.23 + 20) = 881.4
        let params = params_800x600();
        assert!((params.initial_offset(3) - 881.4).abs() < 1e-3);
    }

    #[test]
    fn reading_order_is_reversed() {
        let model = ScrollModel::from_reading_order(
            vec![line(0, "first"), line(1, "second"), line(2, "third")],
            params_800x600(),
        );
        let texts: Vec<&str> = model.lines().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["third", "second", "first"]);
    }

    #[test]
    fn offset_decreases_by_step_each_frame() {
        let mut model = ScrollModel::from_reading_order(
            vec![line(0, "a"), line(1, "b"), line(2, "c")],
            params_800x600(),
        );
        let y0 = model.y_position();
        assert!((y0 - 881.4).abs() < 1e-3);
        for frame in 1..=10 {
            model.advance_frame();
            assert!((model.y_position() - (y0 - 3.0 * frame as f32)).abs() < 1e-3);
        }
    }

    #[test]
    fn speed_multiplier_scales_the_step() {
        let mut params = params_800x600();
        params.speed = 2.0;
        let mut model = ScrollModel::from_reading_order(vec![line(0, "a")], params);
        let y0 = model.y_position();
        model.advance_frame();
        assert!((model.y_position() - (y0 - 6.0)).abs() < 1e-3);
    }

    #[test]
    fn placements_are_centered_horizontally() {
        let mut model =
            ScrollModel::from_reading_order(vec![line(0, "a")], params_800x600());
        let placements = model.advance_frame();
        assert_eq!(placements.len(), 1);
        let p = placements[0];
        assert!((p.x + p.width / 2.0 - 400.0).abs() < 1e-3);
    }

    #[test]
    fn lines_below_the_bottom_render_at_full_scale() {
        let mut model =
            ScrollModel::from_reading_order(vec![line(0, "a")], params_800x600());
        // the block starts below the surface, so scale is clamped to 1.0
        let placements = model.advance_frame();
        assert_eq!(placements[0].scale, 1.0);
        assert_eq!(placements[0].width, 400.0);
        assert_eq!(placements[0].height, 70.0);
    }

    #[test]
    fn removed_lines_never_reappear() {
        let mut model = ScrollModel::from_reading_order(
            (0..5).map(|i| line(i, "x")).collect(),
            params_800x600(),
        );
        let mut seen_after_removal: Vec<LineId> = Vec::new();
        let mut removed: Vec<LineId> = Vec::new();
        while !model.is_finished() {
            let before: Vec<LineId> = model.lines().iter().map(|l| l.id).collect();
            let placements = model.advance_frame();
            for p in &placements {
                assert!(
                    !removed.contains(&p.id),
                    "line {:?} drawn after removal",
                    p.id
                );
                seen_after_removal.push(p.id);
            }
            let after: Vec<LineId> = model.lines().iter().map(|l| l.id).collect();
            for id in before {
                if !after.contains(&id) {
                    removed.push(id);
                }
            }
        }
        assert_eq!(removed.len(), 5);
    }

    #[test]
    fn removal_is_a_filter_not_an_indexed_pop() {
        // Drive until the first frame that removes anything; every line
        // marked in that pass must be gone, with no survivor skipped.
        let mut model = ScrollModel::from_reading_order(
            (0..6).map(|i| line(i, "x")).collect(),
            params_800x600(),
        );
        loop {
            let count_before = model.lines().len();
            model.advance_frame();
            let count_after = model.lines().len();
            if count_after < count_before {
                // survivors keep their relative order
                let ids: Vec<usize> = model.lines().iter().map(|l| l.id.0).collect();
                let mut sorted = ids.clone();
                sorted.sort_unstable_by(|a, b| b.cmp(a));
                assert_eq!(ids, sorted);
                break;
            }
            assert!(!model.is_finished(), "finished before any removal");
        }
    }

    #[test]
    fn removal_happens_at_the_exit_threshold() {
        // single line, 800x600: removal once the post-line anchor
        // drops to 20% of the height (120)
        let mut model = ScrollModel::from_reading_order(vec![line(0, "x")], params_800x600());
        let mut previous_anchor = f32::INFINITY;
        loop {
            let y = model.y_position();
            let placements = model.advance_frame();
            if model.lines().is_empty() {
                let p = placements[0];
                let anchor_after = y - p.height - 20.0;
                assert!(anchor_after <= 120.0);
                // the frame before was still above the threshold
                assert!(previous_anchor > 120.0);
                break;
            }
            previous_anchor = y - placements[0].height - 20.0;
        }
    }

    #[test]
    fn termination_in_finite_frames() {
        let mut model = ScrollModel::from_reading_order(
            (0..4).map(|i| line(i, "x")).collect(),
            params_800x600(),
        );
        let mut frames = 0u32;
        while !model.is_finished() {
            model.advance_frame();
            frames += 1;
            assert!(frames < 100_000, "scroll session failed to terminate");
        }
        assert!(frames > 0);
    }

    #[test]
    fn empty_input_finishes_on_the_first_frame() {
        let mut model = ScrollModel::from_reading_order(Vec::new(), params_800x600());
        assert!(!model.is_finished());
        let placements = model.advance_frame();
        assert!(placements.is_empty());
        assert!(model.is_finished());
    }

    #[test]
    fn finished_model_stays_finished() {
        let mut model = ScrollModel::from_reading_order(Vec::new(), params_800x600());
        model.advance_frame();
        assert!(model.is_finished());
        assert!(model.advance_frame().is_empty());
        assert!(model.is_finished());
    }
}
