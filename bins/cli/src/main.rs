//! Split Easy command-line client.
//!
//! Thin terminal surface over the client crate: sign in, browse friends,
//! groups, and the expense feed, and submit equal-split expenses.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use spliteasy_client::ApiClient;
use spliteasy_client::auth::{Gender, RegisterRequest};
use spliteasy_client::token::FileTokenStore;
use spliteasy_core::expense::{Category, CreateExpenseRequest, ExpenseDraft, SplitType};
use spliteasy_shared::AppConfig;
use spliteasy_shared::types::{Currency, ExpenseId, GroupId, Money, PageRequest, UserId};

#[derive(Parser, Debug)]
#[command(
    name = "spliteasy",
    version,
    about = "Split bills easily with friends and family"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sign in with email and password.
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long, env = "SPLITEASY_PASSWORD")]
        password: String,
    },

    /// Create an account.
    Register {
        #[arg(long)]
        email: String,

        #[arg(long, env = "SPLITEASY_PASSWORD")]
        password: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        phone: String,

        /// male, female, or other.
        #[arg(long, default_value = "other")]
        gender: Gender,
    },

    /// Drop the local session.
    Logout,

    /// Show the signed-in profile.
    Me,

    /// List confirmed friends.
    Friends,

    /// Send a friend request.
    AddFriend {
        /// Id of the user to befriend.
        user_id: i64,
    },

    /// Search users by name or email.
    SearchUsers {
        query: String,

        #[arg(long, default_value_t = 0)]
        page: u32,
    },

    /// List your groups.
    Groups,

    /// Show one group with its members.
    Group {
        group_id: i64,
    },

    /// List your expense feed.
    Expenses {
        #[arg(long, default_value_t = 0)]
        page: u32,

        #[arg(long, default_value_t = 10)]
        size: u32,
    },

    /// Show one expense.
    Expense {
        expense_id: i64,
    },

    /// Submit an equal-split expense.
    AddExpense {
        /// What the money was spent on.
        #[arg(long)]
        description: String,

        /// Total amount, e.g. 45.00.
        #[arg(long)]
        amount: Decimal,

        /// food, travel, shopping, housing, transport, utilities,
        /// entertainment, or other.
        #[arg(long, default_value = "other")]
        category: Category,

        /// Participant user ids (repeat the flag or comma-separate).
        /// Defaults to the group's members when --group is given.
        #[arg(long = "participant", value_delimiter = ',')]
        participants: Vec<i64>,

        /// Group the expense belongs to.
        #[arg(long)]
        group: Option<i64>,

        /// Currency code.
        #[arg(long, default_value = "USD")]
        currency: Currency,
    },

    /// Delete an expense.
    DeleteExpense {
        expense_id: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("spliteasy=info")),
        )
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!(base_url = %config.api.base_url, "using backend");

    let tokens = Arc::new(FileTokenStore::new(&config.auth.token_file));
    let api = ApiClient::new(&config.api, tokens)?;

    match cli.command {
        Commands::Login { email, password } => {
            api.login(&email, &password).await?;
            println!("Signed in as {email}");
        }

        Commands::Register {
            email,
            password,
            name,
            phone,
            gender,
        } => {
            let request = RegisterRequest {
                email: email.clone(),
                password,
                name,
                phone,
                gender,
            };
            api.register(&request).await?;
            println!("Account created, signed in as {email}");
        }

        Commands::Logout => {
            api.logout()?;
            println!("Signed out");
        }

        Commands::Me => {
            let profile = api.me().await?;
            println!("{} <{}> (id {})", profile.name, profile.email, profile.id);
        }

        Commands::Friends => {
            let friends = api.friends().await?;
            if friends.is_empty() {
                println!("You have no friends yet. Try `spliteasy search-users`.");
            }
            for friend in friends {
                println!("{}  {} <{}>", friend.user_id, friend.name, friend.email);
            }
        }

        Commands::AddFriend { user_id } => {
            api.send_friend_request(UserId::from_raw(user_id)).await?;
            println!("Friend request sent to user {user_id}");
        }

        Commands::SearchUsers { query, page } => {
            let results = api.search_users(&query, PageRequest::page(page)).await?;
            for user in &results.content {
                println!("{}  {} <{}>", user.id, user.name, user.email);
            }
            println!(
                "page {}/{} ({} users total)",
                results.page + 1,
                results.total_pages.max(1),
                results.total_elements
            );
        }

        Commands::Groups => {
            for group in api.groups().await? {
                println!("{}  {}", group.id, group.group_name);
            }
        }

        Commands::Group { group_id } => {
            let group = api.group(GroupId::from_raw(group_id)).await?;
            println!("{} (id {})", group.group_name, group.id);
            for member in &group.members {
                println!("  {}  {} <{}>", member.id, member.name, member.email);
            }
        }

        Commands::Expenses { page, size } => {
            let feed = api.expenses(PageRequest { page, size }).await?;
            for expense in &feed.content {
                println!(
                    "{}  {}  {}",
                    expense.id,
                    expense.amount.round_dp(2),
                    expense.description.as_deref().unwrap_or("(no description)")
                );
            }
            println!(
                "page {}/{} ({} expenses total)",
                feed.page + 1,
                feed.total_pages.max(1),
                feed.total_elements
            );
        }

        Commands::Expense { expense_id } => {
            let expense = api.expense(ExpenseId::from_raw(expense_id)).await?;
            println!(
                "{}  {}",
                expense.id,
                expense.description.as_deref().unwrap_or("(no description)")
            );
            println!(
                "amount: {} {}",
                expense.amount.round_dp(2),
                expense
                    .currency
                    .map_or_else(|| "?".to_string(), |c| c.to_string())
            );
            if let Some(payer) = &expense.payer_name {
                println!("paid by: {payer}");
            }
            for (participant, share) in &expense.participant_shares {
                println!("  {participant} owes {share}");
            }
        }

        Commands::AddExpense {
            description,
            amount,
            category,
            participants,
            group,
            currency,
        } => {
            let me = api.me().await?;

            // Mirror the form: an explicit selection wins, otherwise a group
            // expense pre-selects the group's members.
            let participants: Vec<UserId> = if participants.is_empty() {
                match group {
                    Some(group_id) => api.group(GroupId::from_raw(group_id)).await?.member_ids(),
                    None => vec![],
                }
            } else {
                participants.into_iter().map(UserId::from_raw).collect()
            };

            let draft = ExpenseDraft {
                description,
                amount: Money::new(amount, currency),
                payer: me.id,
                participants,
                group: group.map(GroupId::from_raw),
                split_type: SplitType::Equal,
                category,
            };
            let request = CreateExpenseRequest::from_draft(&draft)?;
            api.create_expense(&request).await?;
            println!(
                "Expense added: {} {currency} split {} ways",
                request.amount,
                request.participant_ids.len()
            );
        }

        Commands::DeleteExpense { expense_id } => {
            api.delete_expense(ExpenseId::from_raw(expense_id)).await?;
            println!("Expense {expense_id} deleted");
        }
    }

    Ok(())
}
