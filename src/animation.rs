//! Keyframe rules attached to the showcase section.

use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyframeStop {
    /// Percent offsets sharing this stop, e.g. `&[0, 100]`
    pub offsets: &'static [u8],
    pub opacity: f64,
    pub scale: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframes {
    pub name: &'static str,
    pub stops: &'static [KeyframeStop],
}

/// A class applying a keyframe animation on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClass {
    pub class: &'static str,
    pub keyframes: &'static Keyframes,
    pub duration_secs: f64,
}

/// Per-star shimmer. Stars pick their own duration and delay.
pub const TWINKLE: Keyframes = Keyframes {
    name: "starTwinkle",
    stops: &[
        KeyframeStop {
            offsets: &[0],
            opacity: 0.7,
            scale: 1.0,
        },
        KeyframeStop {
            offsets: &[50],
            opacity: 1.0,
            scale: 1.2,
        },
        KeyframeStop {
            offsets: &[100],
            opacity: 0.7,
            scale: 1.0,
        },
    ],
};

pub const PULSE_SLOW: Keyframes = Keyframes {
    name: "pulseSlow",
    stops: &[
        KeyframeStop {
            offsets: &[0, 100],
            opacity: 0.7,
            scale: 1.0,
        },
        KeyframeStop {
            offsets: &[50],
            opacity: 1.0,
            scale: 1.08,
        },
    ],
};

pub const PULSE_SLOW_CLASS: AnimationClass = AnimationClass {
    class: "animate-pulse-slow",
    keyframes: &PULSE_SLOW,
    duration_secs: 2.5,
};

impl Keyframes {
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = format!("@keyframes {} {{\n", self.name);
        for stop in self.stops {
            let offsets = stop
                .offsets
                .iter()
                .map(|o| format!("{o}%"))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(
                css,
                "  {offsets} {{ opacity: {}; transform: scale({}); }}",
                stop.opacity, stop.scale
            );
        }
        css.push_str("}\n");
        css
    }
}

impl AnimationClass {
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            ".{} {{\n  animation: {} {}s infinite;\n}}\n",
            self.class, self.keyframes.name, self.duration_secs
        )
    }
}

/// Every rule the showcase needs, ready for a `<style>` element.
#[must_use]
pub fn showcase_css() -> String {
    [
        TWINKLE.to_css(),
        PULSE_SLOW_CLASS.to_css(),
        PULSE_SLOW.to_css(),
    ]
    .concat()
}
