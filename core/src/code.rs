//! Code descriptors: the immutable identity of a piece of compiled code.
//!
//! Every invocation of the same compiled function shares one descriptor, so
//! descriptors are interned process-wide and handed around as
//! `Arc<CodeObject>`. Their lifetime is independent of any frame stack.

use std::fmt;
use std::sync::{Arc, Mutex};

use bitflags::bitflags;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

bitflags! {
    /// Kind flags carried by a code descriptor.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CodeFlags: u8 {
        /// Module toplevel rather than a function body.
        const MODULE_BODY = 1 << 0;
        /// Generator body; re-entered instead of started fresh.
        const GENERATOR = 1 << 1;
        /// Locals were resolved to slots at compile time.
        const OPTIMIZED = 1 << 2;
    }
}

/// Name and source position of one compiled function or module body.
#[derive(Debug)]
pub struct CodeObject {
    name: Arc<str>,
    file: Arc<str>,
    line: u32,
    flags: CodeFlags,
}

impl CodeObject {
    pub fn new<N, F>(name: N, file: F, line: u32, flags: CodeFlags) -> Arc<Self>
    where
        N: Into<Arc<str>>,
        F: Into<Arc<str>>,
    {
        Arc::new(Self {
            name: name.into(),
            file: file.into(),
            line,
            flags,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn flags(&self) -> CodeFlags {
        self.flags
    }

    #[inline]
    pub(crate) fn name_arc(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }

    #[inline]
    pub(crate) fn file_arc(&self) -> Arc<str> {
        Arc::clone(&self.file)
    }
}

impl fmt::Display for CodeObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:{})", self.name, self.file, self.line)
    }
}

type CodeKey = (Arc<str>, Arc<str>, u32, CodeFlags);

static CODE_REGISTRY: Lazy<Mutex<FxHashMap<CodeKey, Arc<CodeObject>>>> =
    Lazy::new(|| Mutex::new(FxHashMap::default()));

/// Canonical descriptor for this identity, created on first use.
///
/// Compiled output calls this once per function it emits; repeated calls with
/// the same identity return the same `Arc`.
pub fn intern(name: &str, file: &str, line: u32, flags: CodeFlags) -> Arc<CodeObject> {
    let mut registry = CODE_REGISTRY
        .lock()
        .expect("code descriptor registry poisoned");
    let key: CodeKey = (Arc::from(name), Arc::from(file), line, flags);
    if let Some(existing) = registry.get(&key) {
        return Arc::clone(existing);
    }
    let code = CodeObject::new(Arc::clone(&key.0), Arc::clone(&key.1), line, flags);
    registry.insert(key, Arc::clone(&code));
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_returns_same_descriptor_for_same_identity() {
        let first = intern("loader", "boot.src", 12, CodeFlags::OPTIMIZED);
        let second = intern("loader", "boot.src", 12, CodeFlags::OPTIMIZED);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn intern_distinguishes_line_and_flags() {
        let base = intern("loader", "boot.src", 12, CodeFlags::OPTIMIZED);
        let other_line = intern("loader", "boot.src", 40, CodeFlags::OPTIMIZED);
        let other_flags = intern("loader", "boot.src", 12, CodeFlags::GENERATOR);
        assert!(!Arc::ptr_eq(&base, &other_line));
        assert!(!Arc::ptr_eq(&base, &other_flags));
    }

    #[test]
    fn display_renders_name_and_position() {
        let code = CodeObject::new("entry", "main.src", 3, CodeFlags::MODULE_BODY);
        assert_eq!(code.to_string(), "entry (main.src:3)");
        assert!(code.flags().contains(CodeFlags::MODULE_BODY));
    }
}
