use serde::{Deserialize, Serialize};

/// Options controlling RISC-V emission (spec §4.E).
///
/// The target is fixed at RV32I text emission -- unlike the LLVM backend
/// this crate's ancestor drives, there is no optimization level or target
/// triple to choose, so this struct only carries the knobs the emitter
/// actually has: the fixed-frame size every function reserves on entry,
/// and whether to annotate emitted lines with the IR instruction they
/// came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitOptions {
    /// Bytes subtracted from `sp` on function entry and restored on
    /// return. Every frame slot (named variable, temporary, saved `ra`,
    /// stack-passed argument) must fit within this budget; the emitter
    /// does not check for overflow (spec §9: fragile but self-consistent).
    pub frame_size: u32,

    /// Emit a trailing `# <ir-instr>` comment on each instruction's
    /// first line, matching the source `Instr`. Off by default to keep
    /// output byte-for-byte minimal for exit-status-driven tests.
    pub emit_comments: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions {
            frame_size: 1600,
            emit_comments: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_spec_frame_size() {
        let opts = EmitOptions::default();
        assert_eq!(opts.frame_size, 1600);
        assert!(!opts.emit_comments);
    }

    #[test]
    fn serde_roundtrip() {
        let opts = EmitOptions {
            frame_size: 2048,
            emit_comments: true,
        };
        let json = serde_json::to_string(&opts).unwrap();
        let back: EmitOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(opts, back);
    }
}
