//! The command tree: nodes, handlers, and the builder that assembles them.
//!
//! A tree is built once at process start via [`CommandBuilder`] and is
//! structurally immutable afterwards; only flag values change, during the
//! single dispatch walk of one invocation. Nodes own their children
//! exclusively; there are no parent back-references, and anything a
//! descendant needs is threaded down through the recursion.
//!
//! The engine is generic over a context type `C`, passed unmodified from
//! [`Command::execute`] to the eventually-invoked handler. The engine never
//! inspects it; embeddings use it for shared application state or
//! cancellation.

use super::dispatch;
use super::error::CliError;
use super::flags::FlagSet;

/// Terminal work attached to a leaf node.
///
/// Exactly one non-`None` variant is allowed on a childless node; nodes with
/// children are pure routers and must stay `None`. Both constraints are
/// enforced by [`CommandBuilder::build`].
pub enum Handler<C> {
    /// Fallible handler; its error propagates to the caller unchanged.
    Result(Box<dyn Fn(&C, &Command<C>, &[String]) -> anyhow::Result<()>>),
    /// Infallible handler.
    Unit(Box<dyn Fn(&C, &Command<C>, &[String])>),
    None,
}

pub type PreRunHook<C> = Box<dyn Fn(&C, &Command<C>, &[String]) -> anyhow::Result<()>>;

/// One node of the command tree.
pub struct Command<C> {
    usage: String,
    short: String,
    children: Vec<Command<C>>,
    flags: FlagSet,
    persistent_flags: FlagSet,
    pre_run: Option<PreRunHook<C>>,
    handler: Handler<C>,
}

impl<C> Command<C> {
    /// Primary name: the first whitespace-delimited token of the usage line.
    pub fn name(&self) -> &str {
        self.usage.split_whitespace().next().unwrap_or("")
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub fn short(&self) -> &str {
        &self.short
    }

    pub fn children(&self) -> &[Command<C>] {
        &self.children
    }

    /// Find a direct child by primary name.
    pub fn child(&self, name: &str) -> Option<&Command<C>> {
        self.children.iter().find(|c| c.name() == name)
    }

    /// The node's own flags, parsed only when this node executes.
    pub fn flags(&self) -> &FlagSet {
        &self.flags
    }

    /// Flags parsed at this level before descending into a child.
    pub fn persistent_flags(&self) -> &FlagSet {
        &self.persistent_flags
    }

    pub(crate) fn flags_mut(&mut self) -> &mut FlagSet {
        &mut self.flags
    }

    pub(crate) fn persistent_flags_mut(&mut self) -> &mut FlagSet {
        &mut self.persistent_flags
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Command<C>] {
        &mut self.children
    }

    pub(crate) fn handler(&self) -> &Handler<C> {
        &self.handler
    }

    pub(crate) fn pre_run(&self) -> Option<&PreRunHook<C>> {
        self.pre_run.as_ref()
    }

    /// Run one dispatch walk over this tree.
    ///
    /// `args` is the process argument vector without the program name. Help
    /// output goes to stdout; everything else is up to the handlers. Flag
    /// values bound during the walk stay bound, so a tree is meant to be
    /// executed once per process invocation.
    pub fn execute(&mut self, ctx: &C, args: &[String]) -> Result<(), CliError> {
        dispatch::dispatch(self, ctx, args)
    }
}

/// Builder for a [`Command`] node. Children are built bottom-up and attached
/// with [`CommandBuilder::subcommand`].
pub struct CommandBuilder<C> {
    cmd: Command<C>,
}

impl<C> CommandBuilder<C> {
    /// Start a node. `usage` is the full usage line; its first token is the
    /// primary name used for subcommand matching.
    ///
    /// # Panics
    ///
    /// Panics if `usage` has no first token.
    pub fn new(usage: &str, short: &str) -> Self {
        assert!(
            usage.split_whitespace().next().is_some(),
            "command usage must start with a primary name"
        );
        let name = usage.split_whitespace().next().unwrap_or_default();
        CommandBuilder {
            cmd: Command {
                usage: usage.to_string(),
                short: short.to_string(),
                children: Vec::new(),
                flags: FlagSet::new(name),
                persistent_flags: FlagSet::new(format!("{name}-persistent")),
                pre_run: None,
                handler: Handler::None,
            },
        }
    }

    /// Declare flags local to this node.
    pub fn flags(mut self, configure: impl FnOnce(&mut FlagSet)) -> Self {
        configure(&mut self.cmd.flags);
        self
    }

    /// Declare flags parsed at this level during descent and inherited by
    /// the leaf handling of this node.
    pub fn persistent_flags(mut self, configure: impl FnOnce(&mut FlagSet)) -> Self {
        configure(&mut self.cmd.persistent_flags);
        self
    }

    /// Install a hook that runs after this node's persistent flags are
    /// parsed and before any descendant or handler. An error aborts the
    /// walk.
    pub fn pre_run(
        mut self,
        hook: impl Fn(&C, &Command<C>, &[String]) -> anyhow::Result<()> + 'static,
    ) -> Self {
        self.cmd.pre_run = Some(Box::new(hook));
        self
    }

    /// Attach a fallible handler.
    ///
    /// # Panics
    ///
    /// Panics if a handler is already attached.
    pub fn run(
        mut self,
        handler: impl Fn(&C, &Command<C>, &[String]) -> anyhow::Result<()> + 'static,
    ) -> Self {
        self.set_handler(Handler::Result(Box::new(handler)));
        self
    }

    /// Attach an infallible handler.
    ///
    /// # Panics
    ///
    /// Panics if a handler is already attached.
    pub fn run_unit(mut self, handler: impl Fn(&C, &Command<C>, &[String]) + 'static) -> Self {
        self.set_handler(Handler::Unit(Box::new(handler)));
        self
    }

    /// Attach an owned child node.
    pub fn subcommand(mut self, child: Command<C>) -> Self {
        self.cmd.children.push(child);
        self
    }

    fn set_handler(&mut self, handler: Handler<C>) {
        assert!(
            matches!(self.cmd.handler, Handler::None),
            "handler already attached to command '{}'",
            self.cmd.name()
        );
        self.cmd.handler = handler;
    }

    /// Validate the node and hand back the owned command.
    ///
    /// # Panics
    ///
    /// Panics on structural misconfiguration: a childless node without a
    /// handler, a node with children that also carries a handler, or two
    /// children sharing a primary name. These are programmer errors caught
    /// at startup, never at dispatch time.
    pub fn build(self) -> Command<C> {
        let cmd = self.cmd;
        if cmd.children.is_empty() {
            assert!(
                !matches!(cmd.handler, Handler::None),
                "leaf command '{}' has no handler",
                cmd.name()
            );
        } else {
            assert!(
                matches!(cmd.handler, Handler::None),
                "command '{}' routes to subcommands and must not have a handler",
                cmd.name()
            );
            for (i, child) in cmd.children.iter().enumerate() {
                let clash = cmd.children[..i].iter().any(|c| c.name() == child.name());
                assert!(
                    !clash,
                    "duplicate subcommand '{}' under '{}'",
                    child.name(),
                    cmd.name()
                );
            }
        }
        cmd
    }
}
