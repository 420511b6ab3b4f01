use indexmap::IndexMap;

/// Per-unit lowering context: the label counter is global across every
/// function in the unit (spec §4.D "single global label counter"), kept
/// as a field here rather than the process-global the ported source uses
/// (spec §9) so two units can be lowered concurrently with independent
/// contexts.
#[derive(Debug, Default)]
pub struct LowerCtx {
    next_label: u32,
}

impl LowerCtx {
    pub fn new() -> Self {
        LowerCtx { next_label: 0 }
    }

    /// Mints a fresh, unit-wide-unique label of the form `L<n>`.
    pub fn fresh_label(&mut self) -> String {
        let label = format!("L{}", self.next_label);
        self.next_label += 1;
        label
    }
}

/// Per-function lowering state: the temporary counter (reset per
/// function, spec §4.D) and the qualified-name scope stack.
#[derive(Debug, Default)]
pub struct FuncCtx {
    next_temp: u32,
    scopes: Vec<IndexMap<String, String>>,
    /// `(break_label, continue_label)` of the innermost enclosing loop,
    /// threaded through statement lowering per spec §9's directive.
    loop_targets: Vec<(String, String)>,
}

impl FuncCtx {
    pub fn new() -> Self {
        FuncCtx::default()
    }

    pub fn fresh_temp(&mut self) -> u32 {
        let t = self.next_temp;
        self.next_temp += 1;
        t
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(IndexMap::new());
    }

    pub fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    /// Declares `source_name` in the current scope, minting and returning
    /// its qualified name `<source_name>@<depth>`.
    pub fn declare(&mut self, source_name: &str) -> String {
        let depth = self.scopes.len();
        let qualified = format!("{source_name}@{depth}");
        self.scopes
            .last_mut()
            .expect("no scope pushed")
            .insert(source_name.to_string(), qualified.clone());
        qualified
    }

    /// Resolves `source_name` to its qualified name, walking the scope
    /// stack innermost-first. Semantic analysis has already guaranteed
    /// this resolves for any well-formed program.
    pub fn resolve(&self, source_name: &str) -> Option<&str> {
        self.scopes
            .iter()
            .rev()
            .find_map(|frame| frame.get(source_name))
            .map(String::as_str)
    }

    pub fn push_loop_targets(&mut self, break_label: String, continue_label: String) {
        self.loop_targets.push((break_label, continue_label));
    }

    pub fn pop_loop_targets(&mut self) {
        self.loop_targets.pop();
    }

    pub fn break_target(&self) -> Option<&str> {
        self.loop_targets.last().map(|(b, _)| b.as_str())
    }

    pub fn continue_target(&self) -> Option<&str> {
        self.loop_targets.last().map(|(_, c)| c.as_str())
    }
}
