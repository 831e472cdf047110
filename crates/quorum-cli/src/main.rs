mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use quorum_core::id::UserId;

#[derive(Parser)]
#[command(name = "quorum", about = "Community decision board with canned AI insights", version)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Act as this demo user id (default: QUORUM_USER, then "1")
    #[arg(long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List decisions on the board
    List {
        /// Which decisions to show (all, active, mine)
        #[arg(long, default_value = "all")]
        filter: String,
    },

    /// Show one decision in full
    Show {
        /// Decision ID
        id: String,
    },

    /// Create a decision and synthesize its AI insight
    Create {
        /// Decision title
        #[arg(short, long)]
        title: String,

        /// What is being decided
        #[arg(short, long)]
        description: String,

        /// Category (business, personal, career, lifestyle, finance, technology)
        #[arg(long, default_value = "personal")]
        category: String,

        /// Voting deadline (YYYY-MM-DD, end of that day)
        #[arg(long)]
        deadline: Option<String>,

        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,

        /// Override the insight synthesis delay in milliseconds
        #[arg(long)]
        insight_delay_ms: Option<u64>,
    },

    /// Cast or replace your vote on a decision
    Vote {
        /// Decision ID
        id: String,

        /// yes, no or maybe
        #[arg(long)]
        option: String,

        /// Why you voted this way
        #[arg(long)]
        reasoning: Option<String>,

        /// How sure you are, 1-10
        #[arg(long, default_value = "8")]
        confidence: u8,
    },

    /// Show the vote tally for a decision
    Tally {
        /// Decision ID
        id: String,
    },

    /// Start a discussion thread on a decision
    Discuss {
        /// Decision ID
        id: String,

        /// Comment text
        #[arg(long)]
        content: String,

        /// Stance (pro, con, neutral, question)
        #[arg(long, default_value = "neutral")]
        kind: String,
    },

    /// Reply to a discussion thread
    Reply {
        /// Decision ID
        id: String,

        /// Discussion ID
        discussion: String,

        /// Reply text
        #[arg(long)]
        content: String,
    },

    /// Like a discussion thread, or one of its replies
    Like {
        /// Decision ID
        id: String,

        /// Discussion ID
        discussion: String,

        /// Reply ID (likes the reply instead of the thread)
        reply: Option<String>,
    },

    /// Board-wide counters for the current user
    Stats,

    /// Preview the canned insight for a category
    Insight {
        /// Category to preview
        #[arg(long)]
        category: String,

        /// Title passed through to the synthesizer
        #[arg(long, default_value = "")]
        title: String,

        /// Description passed through to the synthesizer
        #[arg(long, default_value = "")]
        description: String,

        /// Override the insight synthesis delay in milliseconds
        #[arg(long)]
        insight_delay_ms: Option<u64>,
    },
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();
    let user = current_user(cli.user);

    let result = match cli.command {
        Commands::List { filter } => commands::list::run(&filter, &user, cli.json),
        Commands::Show { id } => commands::show::run(&id, cli.json),
        Commands::Create {
            title,
            description,
            category,
            deadline,
            tags,
            insight_delay_ms,
        } => {
            commands::create::run(
                title,
                description,
                category,
                deadline,
                tags,
                insight_delay_ms,
                &user,
                cli.json,
            )
            .await
        }
        Commands::Vote {
            id,
            option,
            reasoning,
            confidence,
        } => commands::vote::run(&id, &option, reasoning, confidence, &user, cli.json),
        Commands::Tally { id } => commands::tally::run(&id, cli.json),
        Commands::Discuss { id, content, kind } => {
            commands::discuss::run(&id, &content, &kind, &user, cli.json)
        }
        Commands::Reply {
            id,
            discussion,
            content,
        } => commands::reply::run(&id, &discussion, &content, &user, cli.json),
        Commands::Like {
            id,
            discussion,
            reply,
        } => commands::like::run(&id, &discussion, reply, cli.json),
        Commands::Stats => commands::stats::run(&user, cli.json),
        Commands::Insight {
            category,
            title,
            description,
            insight_delay_ms,
        } => commands::insight::run(&category, &title, &description, insight_delay_ms, cli.json).await,
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn current_user(flag: Option<String>) -> UserId {
    let id = flag
        .or_else(|| std::env::var("QUORUM_USER").ok())
        .unwrap_or_else(|| "1".to_string());
    UserId::from(id)
}
