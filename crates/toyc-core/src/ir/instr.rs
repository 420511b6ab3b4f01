use serde::{Deserialize, Serialize};

use super::operand::Operand;
use crate::ast::{BinOp, UnOp};

/// A single three-address instruction.
///
/// # Invariants (enforced by `toyc-codegen::irgen`, assumed by `emit`)
/// - Every `Temp` is the `dest` of exactly one instruction within its
///   function (SSA-like at the temporary level; named operands may be
///   reassigned freely via `Move`).
/// - Every label referenced by `Jump`/`CJump` appears exactly once as a
///   `Label` within the same function.
/// - Every `Call` target is a function defined in the same compilation
///   unit -- ToyC has no runtime library and no external linkage.
///
/// # `Load`/`Store`
///
/// These exist in the instruction set because a second, `Name`-based IR
/// variant in the ported source generates them for every variable read and
/// write. That variant is *not* implemented here (see `toyc-codegen::irgen`
/// module docs): the generator in this crate only ever emits `Move`. They
/// are kept as reserved opcodes for a future memory model (e.g. arrays,
/// pointers) and are rejected by the emitter as an internal invariant
/// violation if one ever appears in generated IR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Instr {
    BinOp {
        dest: Operand,
        op: BinOp,
        src1: Operand,
        src2: Operand,
    },
    UnOp {
        dest: Operand,
        op: UnOp,
        src: Operand,
    },
    /// Register/memory copy; the storage class of `dest`/`src` is
    /// determined by the operand kind.
    Move {
        dest: Operand,
        src: Operand,
    },
    /// Reserved -- see module docs. Never emitted by `irgen`.
    Load {
        dest: Operand,
        src_addr: Operand,
    },
    /// Reserved -- see module docs. Never emitted by `irgen`.
    Store {
        dest_addr: Operand,
        src: Operand,
    },
    Label(String),
    Jump(String),
    CJump {
        cond: Operand,
        label_true: String,
        label_false: String,
    },
    Call {
        dest: Option<Operand>,
        name: String,
        args: Vec<Operand>,
    },
    Return(Option<Operand>),
}
