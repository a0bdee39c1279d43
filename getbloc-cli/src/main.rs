//! getbloc CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use getbloc::scaffold::ScaffoldKind;
use getbloc::snippet::SnippetShape;
use getbloc_cli_lib::commands::{list_code_actions, PageArg, ScaffoldArgs, ScaffoldCommand, WrapArgs, WrapCommand};
use getbloc_cli_lib::DialoguerPrompter;

#[derive(Parser)]
#[command(name = "getbloc")]
#[command(version)]
#[command(about = "Scaffold GetBloc controllers, modules and bindings", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create event, state and controller files under `state/`
    #[command(name = "new-controller")]
    NewController(ScaffoldArgs),
    /// Create state and state-only controller files under `state/`
    #[command(name = "new-statecontroller")]
    NewStateController(ScaffoldArgs),
    /// Create a module directory with controller files and a page
    #[command(name = "new-module")]
    NewModule {
        #[command(flatten)]
        args: ScaffoldArgs,
        /// Page variant (default: `module_page` setting)
        #[arg(long, value_enum)]
        page: Option<PageArg>,
        /// Also create `<name>_binding.dart`
        #[arg(long)]
        with_binding: bool,
    },
    /// Create a binding that lazily registers the controller
    #[command(name = "new-binding")]
    NewBinding(ScaffoldArgs),
    /// Wrap the selection with `Obx`
    #[command(name = "wrap-obx")]
    WrapObx(WrapArgs),
    /// Wrap the selection with `ListenerWidget`
    #[command(name = "wrap-listenerwidget")]
    WrapListenerWidget(WrapArgs),
    /// Wrap the selection with `ObserverWidget`
    #[command(name = "wrap-observerwidget")]
    WrapObserverWidget(WrapArgs),
    /// List wrap actions available for the selection on stdin
    #[command(name = "code-actions")]
    CodeActions,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    getbloc::observability::init(cli.verbose)?;

    let prompter = DialoguerPrompter::default();

    match cli.command {
        Commands::NewController(args) => {
            ScaffoldCommand::new(ScaffoldKind::Controller, args)
                .execute(&prompter)
                .await?;
        }
        Commands::NewStateController(args) => {
            ScaffoldCommand::new(ScaffoldKind::StateController, args)
                .execute(&prompter)
                .await?;
        }
        Commands::NewModule {
            args,
            page,
            with_binding,
        } => {
            ScaffoldCommand::module(args, page, with_binding)
                .execute(&prompter)
                .await?;
        }
        Commands::NewBinding(args) => {
            ScaffoldCommand::new(ScaffoldKind::Binding, args)
                .execute(&prompter)
                .await?;
        }
        Commands::WrapObx(args) => wrap(SnippetShape::Obx, args)?,
        Commands::WrapListenerWidget(args) => wrap(SnippetShape::ListenerWidget, args)?,
        Commands::WrapObserverWidget(args) => wrap(SnippetShape::ObserverWidget, args)?,
        Commands::CodeActions => {
            list_code_actions(std::io::stdin().lock(), std::io::stdout().lock())?;
        }
    }

    Ok(())
}

fn wrap(shape: SnippetShape, args: WrapArgs) -> Result<()> {
    let wrapped = WrapCommand::new(shape, args).execute(std::io::stdin().lock(), std::io::stdout().lock())?;
    if !wrapped {
        tracing::info!("Nothing selected");
    }
    Ok(())
}
