//! Looping sprite-sheet animation
//!
//! The sheet holds `frames` equal-width frames laid out horizontally. The
//! current frame advances once every `ticks_per_frame` simulation steps.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteAnimation {
    frames: u32,
    ticks_per_frame: u32,
    /// Steps since the last frame change
    counter: u32,
    /// Index of the frame currently shown
    frame: u32,
}

impl SpriteAnimation {
    /// Zero counts are clamped to one so the animation always has a frame to show
    pub fn new(frames: u32, ticks_per_frame: u32) -> Self {
        Self {
            frames: frames.max(1),
            ticks_per_frame: ticks_per_frame.max(1),
            counter: 0,
            frame: 0,
        }
    }

    /// Advance by one simulation step
    pub fn step(&mut self) {
        self.counter += 1;
        if self.counter >= self.ticks_per_frame {
            self.counter = 0;
            self.frame = (self.frame + 1) % self.frames;
        }
    }

    /// Index of the frame currently shown (0-based)
    #[inline]
    pub fn frame(&self) -> u32 {
        self.frame
    }

    #[inline]
    pub fn frame_count(&self) -> u32 {
        self.frames
    }

    /// Horizontal pixel offset of the current frame within a sheet
    #[inline]
    pub fn offset(&self, frame_width: u32) -> u32 {
        self.frame * frame_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_advances_every_five_steps() {
        let mut anim = SpriteAnimation::new(4, 5);
        for _ in 0..4 {
            anim.step();
        }
        assert_eq!(anim.frame(), 0);
        anim.step();
        assert_eq!(anim.frame(), 1);
    }

    #[test]
    fn test_offset_cycles_through_four_values() {
        let frame_width = 48;
        let mut anim = SpriteAnimation::new(4, 5);
        let mut offsets = Vec::new();

        for _ in 0..4 {
            offsets.push(anim.offset(frame_width));
            for _ in 0..5 {
                anim.step();
            }
        }

        assert_eq!(offsets, vec![0, 48, 96, 144]);
        // Back to the first frame after the fourth
        assert_eq!(anim.offset(frame_width), 0);
    }

    #[test]
    fn test_zero_counts_are_clamped() {
        let mut anim = SpriteAnimation::new(0, 0);
        anim.step();
        assert_eq!(anim.frame(), 0);
        assert_eq!(anim.frame_count(), 1);
    }
}
