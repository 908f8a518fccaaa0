//! Per-frame orchestration of the effect
//!
//! `EffectRunner` owns the stage machine and the pre-rasterized line
//! art, reacts to platform events and composites each frame into a CPU
//! frame buffer. It knows nothing about the window or the GPU, which
//! keeps the whole per-frame path testable off-screen.

use recede_effect::{ScrollLine, ScrollModel, ScrollParams, Stage};
use recede_gpu::FrameBuffer;
use recede_platform::ControlFlow;
use recede_text::LineBitmap;

const BACKGROUND: [u8; 3] = [0, 0, 0];
const PROMPT_COLOR: [u8; 3] = [255, 255, 255];

pub struct EffectRunner {
    stage: Stage,
    params: ScrollParams,
    /// Wrapped lines in reading order, handed to the scroll model on
    /// the starting click
    lines: Vec<ScrollLine>,
    /// Rasterized line art, indexed by `LineId`
    art: Vec<LineBitmap>,
    prompt: LineBitmap,
    color: [u8; 3],
    model: Option<ScrollModel>,
}

impl EffectRunner {
    pub fn new(
        params: ScrollParams,
        lines: Vec<ScrollLine>,
        art: Vec<LineBitmap>,
        prompt: LineBitmap,
        color: [u8; 3],
    ) -> Self {
        debug_assert_eq!(lines.len(), art.len());
        Self {
            stage: Stage::default(),
            params,
            lines,
            art,
            prompt,
            color,
            model: None,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Close request from the window system ends the session whatever
    /// stage it is in
    pub fn on_close(&mut self) -> ControlFlow {
        self.stage.finish();
        ControlFlow::Exit
    }

    /// A primary click starts the scroll; clicks in any other stage
    /// are ignored
    pub fn on_primary_click(&mut self) {
        if self.stage.begin_scroll() {
            let lines = std::mem::take(&mut self.lines);
            self.model = Some(ScrollModel::from_reading_order(lines, self.params));
        }
    }

    /// Compose one frame. Returns `Exit` once the content has fully
    /// scrolled off.
    pub fn render(&mut self, frame: &mut FrameBuffer) -> ControlFlow {
        frame.fill(BACKGROUND);

        match self.stage {
            Stage::AwaitingClick => {
                let x = (frame.width() as i32 - self.prompt.width as i32) / 2;
                let y = (frame.height() as i32 - self.prompt.height as i32) / 2;
                frame.blit_mask(
                    &self.prompt.data,
                    self.prompt.width,
                    self.prompt.height,
                    x,
                    y,
                    PROMPT_COLOR,
                );
                ControlFlow::Continue
            }
            Stage::Scrolling => {
                let Some(model) = self.model.as_mut() else {
                    self.stage.finish();
                    return ControlFlow::Exit;
                };
                for placement in model.advance_frame() {
                    let bitmap = &self.art[placement.id.0];
                    frame.blit_mask_scaled(
                        &bitmap.data,
                        bitmap.width,
                        bitmap.height,
                        placement.width.round().max(1.0) as u32,
                        placement.height.round().max(1.0) as u32,
                        placement.x.round() as i32,
                        placement.y.round() as i32,
                        self.color,
                    );
                }
                if model.is_finished() {
                    self.stage.finish();
                    ControlFlow::Exit
                } else {
                    ControlFlow::Continue
                }
            }
            Stage::Done => ControlFlow::Exit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recede_effect::LineId;

    fn solid_bitmap(width: u32, height: u32) -> LineBitmap {
        LineBitmap {
            data: vec![255; (width * height) as usize],
            width,
            height,
        }
    }

    fn runner(line_count: usize) -> EffectRunner {
        let params = ScrollParams {
            surface_width: 800.0,
            surface_height: 600.0,
            start_font_size: 60.0,
            line_spacing: 20.0,
            speed: 1.0,
        };
        let lines = (0..line_count)
            .map(|i| ScrollLine {
                id: LineId(i),
                text: format!("line {i}"),
                base_width: 400.0,
                base_height: 70.0,
            })
            .collect();
        let art = (0..line_count).map(|_| solid_bitmap(400, 70)).collect();
        EffectRunner::new(params, lines, art, solid_bitmap(300, 40), [255, 255, 0])
    }

    fn lit_pixels(frame: &FrameBuffer) -> usize {
        frame
            .pixels()
            .chunks_exact(4)
            .filter(|p| p[0] > 0 || p[1] > 0 || p[2] > 0)
            .count()
    }

    #[test]
    fn prompt_is_drawn_before_any_click() {
        let mut runner = runner(2);
        let mut frame = FrameBuffer::new(800, 600);
        assert_eq!(runner.render(&mut frame), ControlFlow::Continue);
        assert_eq!(runner.stage(), Stage::AwaitingClick);
        // the 300x40 prompt blits fully on-screen
        assert_eq!(lit_pixels(&frame), 300 * 40);
    }

    #[test]
    fn click_switches_to_scrolling_and_clears_the_prompt() {
        let mut runner = runner(2);
        runner.on_primary_click();
        assert_eq!(runner.stage(), Stage::Scrolling);

        let mut frame = FrameBuffer::new(800, 600);
        assert_eq!(runner.render(&mut frame), ControlFlow::Continue);
        // the block starts below the surface, nothing is visible yet
        assert_eq!(lit_pixels(&frame), 0);
    }

    #[test]
    fn second_click_does_not_restart_the_session() {
        let mut runner = runner(3);
        runner.on_primary_click();
        let mut frame = FrameBuffer::new(800, 600);
        for _ in 0..50 {
            runner.render(&mut frame);
        }
        runner.on_primary_click();
        assert_eq!(runner.stage(), Stage::Scrolling);
    }

    #[test]
    fn session_exits_once_content_scrolls_off() {
        let mut runner = runner(2);
        runner.on_primary_click();
        let mut frame = FrameBuffer::new(800, 600);
        let mut frames = 0u32;
        loop {
            frames += 1;
            assert!(frames < 100_000, "effect failed to terminate");
            if runner.render(&mut frame) == ControlFlow::Exit {
                break;
            }
        }
        assert_eq!(runner.stage(), Stage::Done);
        // exits stay terminal
        assert_eq!(runner.render(&mut frame), ControlFlow::Exit);
    }

    #[test]
    fn close_exits_from_the_prompt_stage() {
        let mut runner = runner(1);
        assert_eq!(runner.on_close(), ControlFlow::Exit);
        assert_eq!(runner.stage(), Stage::Done);
        // a click after close does not revive the effect
        runner.on_primary_click();
        assert_eq!(runner.stage(), Stage::Done);
    }

    #[test]
    fn empty_text_exits_on_the_first_scroll_frame() {
        let mut runner = runner(0);
        runner.on_primary_click();
        let mut frame = FrameBuffer::new(800, 600);
        assert_eq!(runner.render(&mut frame), ControlFlow::Exit);
    }
}
