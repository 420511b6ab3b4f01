use indexmap::IndexMap;

use toyc_core::ir::Operand;

/// Per-function activation-record layout (spec §4.E "Per-function
/// frame"): a name -> positive-offset-from-`sp` table, growing by 4
/// bytes per distinct operand on first use. `ra` is reserved its own
/// slot immediately after construction, ahead of any parameter or
/// temporary.
pub struct Frame {
    slots: IndexMap<String, u32>,
    next_offset: u32,
}

const SLOT_SIZE: u32 = 4;

impl Frame {
    /// Builds a fresh frame with `ra`'s slot pre-allocated at offset 0.
    pub fn new() -> Self {
        let mut frame = Frame {
            slots: IndexMap::new(),
            next_offset: 0,
        };
        frame.slot_for("ra");
        frame
    }

    pub fn ra_offset(&self) -> u32 {
        self.slots["ra"]
    }

    /// Returns the offset for `key` (`"x"`, `"t3"`, `"ra"`), allocating a
    /// fresh slot on first touch.
    pub fn slot_for(&mut self, key: &str) -> u32 {
        if let Some(offset) = self.slots.get(key) {
            return *offset;
        }
        let offset = self.next_offset;
        self.slots.insert(key.to_string(), offset);
        self.next_offset += SLOT_SIZE;
        offset
    }

    pub fn slot_for_operand(&mut self, operand: &Operand) -> u32 {
        self.slot_for(&operand_key(operand))
    }
}

/// The per-function slot key for a `Name`/`Temp` operand: a bare variable
/// or temporary, both keyed by string, as spec §4.E specifies (`x` or
/// `t<N>`). `Const` has no slot -- it materializes directly via `li`.
pub fn operand_key(operand: &Operand) -> String {
    match operand {
        Operand::Name(name) => name.clone(),
        Operand::Temp(n) => format!("t{n}"),
        Operand::Const(_) => panic!("Const operands have no frame slot"),
    }
}
