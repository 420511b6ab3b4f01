use indexmap::IndexMap;
use toyc_core::Type;

/// What the analyzer knows about a declared variable.
#[derive(Debug, Clone, Copy)]
pub struct VarInfo {
    pub ty: Type,
}

/// What the analyzer knows about a declared function, built in pass 1.
#[derive(Debug, Clone)]
pub struct FuncInfo {
    pub return_type: Type,
    pub param_types: Vec<Type>,
}

/// A stack of scopes, each a name -> [`VarInfo`] map.
///
/// Lookup walks the stack from top to bottom (innermost scope first, as
/// spec §4.C requires); declaration always inserts into the top frame.
/// `IndexMap` is used purely for its insertion-order iteration -- nothing
/// here currently depends on that order, but it matches the convention
/// used everywhere else a name table exists in this codebase.
#[derive(Debug, Default)]
pub struct Scopes {
    frames: Vec<IndexMap<String, VarInfo>>,
}

impl Scopes {
    pub fn new() -> Self {
        Scopes { frames: Vec::new() }
    }

    pub fn push(&mut self) {
        self.frames.push(IndexMap::new());
    }

    pub fn pop(&mut self) {
        self.frames.pop();
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Declares `name` in the current (topmost) scope. Returns `false` if
    /// `name` is already declared in *that* scope -- shadowing an outer
    /// scope is fine and is the caller's job to allow.
    pub fn declare(&mut self, name: &str, info: VarInfo) -> bool {
        let top = self.frames.last_mut().expect("no scope pushed");
        if top.contains_key(name) {
            return false;
        }
        top.insert(name.to_string(), info);
        true
    }

    pub fn declared_in_current_scope(&self, name: &str) -> bool {
        self.frames
            .last()
            .map(|f| f.contains_key(name))
            .unwrap_or(false)
    }

    pub fn lookup(&self, name: &str) -> Option<VarInfo> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(name))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_walks_from_innermost_scope() {
        let mut scopes = Scopes::new();
        scopes.push();
        scopes.declare("x", VarInfo { ty: Type::Int });
        scopes.push();
        scopes.declare("x", VarInfo { ty: Type::Int });
        assert_eq!(scopes.depth(), 2);
        scopes.pop();
        assert!(scopes.lookup("x").is_some());
        scopes.pop();
        assert!(scopes.lookup("x").is_none());
    }

    #[test]
    fn declare_rejects_redeclaration_in_same_scope_only() {
        let mut scopes = Scopes::new();
        scopes.push();
        assert!(scopes.declare("x", VarInfo { ty: Type::Int }));
        assert!(!scopes.declare("x", VarInfo { ty: Type::Int }));
        scopes.push();
        // shadowing an outer scope is fine
        assert!(scopes.declare("x", VarInfo { ty: Type::Int }));
    }
}
