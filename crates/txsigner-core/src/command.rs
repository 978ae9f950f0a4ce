//! Wrapping transaction commands with type registration.
//!
//! The signing, multi-signing and signature validation operations live
//! outside this crate behind [`TxCommand`]. [`PluginAwareCommand`] runs the
//! registration pipeline before them and cleans their output afterwards.

use std::path::PathBuf;

use crate::codec::Codec;
use crate::config::PluginsConfig;
use crate::error::{Error, Result};
use crate::extension::{ExtensionLoader, ModuleSource, NativeModuleSource};
use crate::filter::NullKeyFilter;
use crate::scan::UnresolvedSet;
use crate::tx::read_messages;

/// Inputs shared by the offline transaction commands.
#[derive(Debug, Clone, Default)]
pub struct TxCommandArgs {
    /// Transaction document (or batch file) to operate on
    pub tx_file: PathBuf,
    /// Directory searched for extension modules
    pub plugins_dir: Option<PathBuf>,
    pub offline: bool,
    pub account_number: Option<u64>,
    pub sequence: Option<u64>,
    /// Where the command writes its result, if anywhere
    pub output_document: Option<PathBuf>,
    /// Positional arguments for the wrapped command
    pub extra: Vec<String>,
}

impl TxCommandArgs {
    /// Offline mode, account number and sequence are mandatory.
    pub fn validate(&self) -> Result<()> {
        if !self.offline {
            return Err(Error::MissingArgument("offline"));
        }
        if self.account_number.is_none() {
            return Err(Error::MissingArgument("account-number"));
        }
        if self.sequence.is_none() {
            return Err(Error::MissingArgument("sequence"));
        }
        Ok(())
    }
}

/// An operation on a transaction document that needs a complete codec.
pub trait TxCommand {
    fn name(&self) -> &str;

    fn run(&self, codec: &Codec, args: &TxCommandArgs) -> Result<()>;

    /// Whether the output document should be null-filtered afterwards.
    fn writes_output(&self) -> bool {
        true
    }
}

/// Runs a [`TxCommand`] with extension loading before and output filtering
/// after.
pub struct PluginAwareCommand<C, S = NativeModuleSource> {
    inner: C,
    loader: ExtensionLoader<S>,
    filter: NullKeyFilter,
}

impl<C: TxCommand> PluginAwareCommand<C, NativeModuleSource> {
    pub fn new(inner: C) -> Self {
        Self::with_loader(inner, ExtensionLoader::new())
    }
}

impl<C: TxCommand, S: ModuleSource> PluginAwareCommand<C, S> {
    pub fn with_loader(inner: C, loader: ExtensionLoader<S>) -> Self {
        Self {
            inner,
            loader,
            filter: NullKeyFilter::default(),
        }
    }

    pub fn with_filter(mut self, filter: NullKeyFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn loader(&self) -> &ExtensionLoader<S> {
        &self.loader
    }

    /// Returns the type URLs that were registered from extensions.
    pub fn run(&mut self, codec: &mut Codec, args: &TxCommandArgs) -> Result<UnresolvedSet> {
        args.validate()?;
        let plugins = PluginsConfig::resolve(args.plugins_dir.clone())?;

        let messages = read_messages(&args.tx_file)?;
        let registered = self
            .loader
            .ensure_registered(codec, &plugins.plugins_dir, &messages)?;

        tracing::debug!("Running {}", self.inner.name());
        self.inner.run(codec, args).map_err(|e| match e {
            Error::Command { .. } => e,
            other => Error::Command {
                command: self.inner.name().to_string(),
                reason: other.to_string(),
            },
        })?;

        if self.inner.writes_output() {
            if let Some(output) = &args.output_document {
                self.filter.filter_file(output)?;
            }
        }

        Ok(registered)
    }
}
