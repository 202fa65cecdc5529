//! Command-line definition for the `ivoculture` binary.

use clap::{Args, Parser, Subcommand};

use ivoculture::{ContentType, LocalProfileKind, PaymentMethod, Plan, PromotionType, ReportReason};

/// IvoCulture - browse the Ivorian cultural catalogue, online or not
#[derive(Parser, Debug)]
#[command(name = "ivoculture")]
#[command(version)]
#[command(about = "Offline-resilient client for the IvoCulture catalogue", long_about = None)]
pub struct Cli {
    /// Backend base URL (overrides config and IVOCULTURE_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Keep everything in memory; nothing is read from or written to disk
    #[arg(long, global = true)]
    pub in_memory: bool,

    /// Compact JSON instead of pretty-printed
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List contents (region wins over --featured, which wins over --type)
    Contents {
        #[arg(long = "type", value_name = "TYPE")]
        content_type: Option<ContentType>,
        #[arg(long)]
        featured: bool,
        #[arg(long, value_name = "ID")]
        region: Option<i64>,
    },
    /// Show one content
    Content { id: i64 },
    /// Search titles, descriptions and tags
    Search { query: String },
    /// Browsable categories
    Categories,
    /// Contents recommended for the signed-in account
    Recommendations,
    /// Contributions of the signed-in account
    Contributions,
    /// Like a content
    Like { id: i64 },
    /// List regions
    Regions,
    /// Show one region
    Region { id: i64 },
    /// List promotions
    Promotions {
        #[arg(long = "type", value_name = "TYPE")]
        promotion_type: Option<PromotionType>,
        #[arg(long)]
        featured: bool,
    },
    /// Show one promotion
    Promotion { id: i64 },
    /// Manage favorites
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// Report a content
    Report {
        id: i64,
        #[arg(long, default_value = "fausse_info")]
        reason: ReportReason,
    },
    /// Sign in
    Login { email: String, password: String },
    /// Create an account (does not sign in)
    Register {
        email: String,
        username: String,
        password: String,
        #[arg(long)]
        name: Option<String>,
    },
    /// Sign out and forget the session
    Logout,
    /// Show the current session
    Whoami,
    /// Re-fetch the signed-in profile
    Reload,
    /// Start an offline profile, no account needed
    Profile {
        username: String,
        #[arg(long)]
        name: Option<String>,
        /// Visitor instead of resident
        #[arg(long)]
        touriste: bool,
    },
    /// Premium plans
    Plans,
    /// Subscribe to premium
    Subscribe {
        plan: Plan,
        #[command(flatten)]
        payment: PaymentArgs,
    },
    /// Cancel the local premium subscription
    Unsubscribe,
    /// Local store integrity and row counts
    Storage,
    /// Back-office (admin accounts only)
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum FavoritesAction {
    List,
    Add { id: i64 },
    Remove {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<i64>,
    },
}

#[derive(Subcommand, Debug)]
pub enum AdminAction {
    Stats,
    Users,
    Deactivate { id: i64 },
    Contents,
    Publish { id: i64 },
    Feature { id: i64 },
    Delete { id: i64 },
    Regions,
    Promotions,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct PaymentArgs {
    /// Mobile money number (Orange, MTN, Moov, Wave)
    #[arg(long, value_name = "NUMBER")]
    pub mobile_money: Option<String>,

    /// Pay by card
    #[arg(long)]
    pub card: bool,
}

impl PaymentArgs {
    pub fn method(&self) -> PaymentMethod {
        match &self.mobile_money {
            Some(numero) => PaymentMethod::MobileMoney {
                numero: numero.clone(),
            },
            None => PaymentMethod::Card,
        }
    }
}

pub fn profile_kind(touriste: bool) -> LocalProfileKind {
    if touriste {
        LocalProfileKind::Touriste
    } else {
        LocalProfileKind::Local
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_contents_filters() {
        let cli = Cli::parse_from(["ivoculture", "contents", "--type", "masque", "--featured"]);
        match cli.command {
            Command::Contents {
                content_type,
                featured,
                region,
            } => {
                assert_eq!(content_type, Some(ContentType::Masque));
                assert!(featured);
                assert_eq!(region, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn subscribe_needs_exactly_one_method() {
        assert!(Cli::try_parse_from(["ivoculture", "subscribe", "mensuel"]).is_err());
        assert!(Cli::try_parse_from([
            "ivoculture",
            "subscribe",
            "mensuel",
            "--card",
            "--mobile-money",
            "0708091011"
        ])
        .is_err());

        let cli = Cli::parse_from([
            "ivoculture",
            "subscribe",
            "annuel",
            "--mobile-money",
            "0708091011",
        ]);
        match cli.command {
            Command::Subscribe { plan, payment } => {
                assert_eq!(plan, Plan::Annuel);
                assert!(matches!(payment.method(), PaymentMethod::MobileMoney { .. }));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn favorites_remove_takes_many_ids() {
        let cli = Cli::parse_from(["ivoculture", "favorites", "remove", "1", "2", "3"]);
        match cli.command {
            Command::Favorites {
                action: FavoritesAction::Remove { ids },
            } => assert_eq!(ids, vec![1, 2, 3]),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn unknown_report_reason_is_rejected() {
        assert!(Cli::try_parse_from(["ivoculture", "report", "3", "--reason", "spam"]).is_err());
    }
}
