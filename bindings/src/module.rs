use crate::constructors;
use crate::constructors::Object;
use crate::error::ConstructError;
use crate::value::Value;

/// The unified signature shared by every registered constructor.
pub type ConstructorFn = fn(&[Value]) -> Result<Object, ConstructError>;

/// A named constructor entry, as exposed to the embedder.
#[derive(Clone, Copy)]
pub struct ConstructorObj {
    pub name: &'static str,
    pub func: ConstructorFn,
}

/// The constructor table the embedder dispatches against.
///
/// Entries are registered once at creation; lookups never mutate, so a
/// `Module` can be shared freely across threads.
pub struct Module {
    constructors: Vec<ConstructorObj>,
}

impl Module {
    /// Creates the table with all engine constructors registered.
    pub fn new() -> Self {
        let mut module = Self {
            constructors: Vec::new(),
        };
        module.bootstrap_constructors();
        module
    }

    fn define_constructor(&mut self, name: &'static str, func: ConstructorFn) {
        self.constructors.push(ConstructorObj { name, func });
    }

    fn bootstrap_constructors(&mut self) {
        self.define_constructor("Immediate", constructors::immediate);
        self.define_constructor("Instruction", constructors::instruction);
        self.define_constructor("MemoryAccess", constructors::memory_access);
        self.define_constructor("ExecutionContext", constructors::execution_context);
    }

    /// Looks up a constructor by its exposed name.
    pub fn get(&self, name: &str) -> Option<ConstructorFn> {
        self.constructors
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.func)
    }

    /// All registered entries, in registration order.
    pub fn constructors(&self) -> &[ConstructorObj] {
        &self.constructors
    }
}

impl Default for Module {
    fn default() -> Self {
        Self::new()
    }
}
