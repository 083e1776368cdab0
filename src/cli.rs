use std::io::{self, Write as _};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::bail;
use clap::{Args, Parser, Subcommand};

use crate::modules::applications::adapter::outgoing::ApplicationGatewayHttp;
use crate::modules::applications::application::controller::ApplicationsController;
use crate::modules::applications::application::queries::ApplicationFilter;
use crate::modules::applications::domain::entities::{Application, ApplicationStatus};
use crate::modules::careers::adapter::outgoing::CareerGatewayHttp;
use crate::modules::careers::application::controller::CareersController;
use crate::modules::careers::application::form::CareerForm;
use crate::modules::careers::application::queries::CareerFilter;
use crate::modules::careers::domain::entities::Career;
use crate::modules::services::adapter::outgoing::ServiceGatewayHttp;
use crate::modules::services::application::controller::ServicesController;
use crate::modules::services::application::forms::{ItemForm, SectionForm};
use crate::modules::session::adapter::outgoing::{AuthGatewayHttp, FileSessionStore};
use crate::modules::session::application::guard::{GuardDecision, SessionGuard};
use crate::modules::session::application::use_cases::change_password::ChangePasswordUseCase;
use crate::modules::session::application::use_cases::login::{LoginRequest, LoginUseCase};
use crate::modules::session::application::use_cases::logout::LogoutUseCase;
use crate::modules::session::application::use_cases::password_reset::{
    ForgotPasswordUseCase, ResetPasswordUseCase,
};
use crate::modules::stats::adapter::outgoing::StatsGatewayHttp;
use crate::modules::stats::application::overview::DashboardOverview;
use crate::modules::users::adapter::outgoing::UserGatewayHttp;
use crate::modules::users::application::controller::UsersController;
use crate::modules::users::application::form::UserForm;
use crate::modules::users::domain::entities::UserRole;
use crate::shared::config::Config;
use crate::shared::domain::{EntityId, ImageUpload};
use crate::shared::forms::SubmitOutcome;
use crate::shared::http::ApiClient;
use crate::shared::listing::FilterChoice;
use crate::shared::notify::Notifier;

#[derive(Parser)]
#[command(
    name = "macc-admin",
    about = "Admin console for the MACC construction-services backend",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign in and persist the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out and clear the stored session
    Logout,
    /// Request a password-reset token for an account
    ForgotPassword {
        #[arg(long)]
        email: String,
    },
    /// Redeem a reset token for a new password
    ResetPassword {
        #[arg(long)]
        token: String,
        #[arg(long)]
        password: String,
    },
    /// Change an account's password
    ChangePassword {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Dashboard statistics
    Stats,
    /// Job postings
    Careers {
        #[command(subcommand)]
        command: CareersCommand,
    },
    /// Job applications
    Applications {
        #[command(subcommand)]
        command: ApplicationsCommand,
    },
    /// Service sections and their items
    Services {
        #[command(subcommand)]
        command: ServicesCommand,
    },
    /// Console accounts
    Users {
        #[command(subcommand)]
        command: UsersCommand,
    },
}

#[derive(Subcommand)]
enum CareersCommand {
    /// List postings, optionally filtered
    List {
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    /// Show one posting
    Show { id: String },
    /// Post a new job
    Post(CareerFields),
    /// Flip a posting between active and inactive
    Toggle { id: String },
    /// Delete one posting (asks for confirmation)
    Delete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
    /// Delete several postings in one call
    BulkDelete {
        ids: Vec<String>,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args)]
struct CareerFields {
    #[arg(long)]
    title_en: String,
    #[arg(long)]
    title_ar: String,
    #[arg(long)]
    department_en: String,
    #[arg(long)]
    department_ar: String,
    #[arg(long)]
    location_en: String,
    #[arg(long)]
    location_ar: String,
    #[arg(long, default_value = "Full-Time")]
    employment_type_en: String,
    #[arg(long, default_value = "دوام كامل")]
    employment_type_ar: String,
    #[arg(long, default_value = "")]
    short_description_en: String,
    #[arg(long, default_value = "")]
    short_description_ar: String,
    #[arg(long, default_value = "")]
    description_en: String,
    #[arg(long, default_value = "")]
    description_ar: String,
    /// One responsibility per line
    #[arg(long, default_value = "")]
    responsibilities_en: String,
    #[arg(long, default_value = "")]
    responsibilities_ar: String,
    /// One requirement per line
    #[arg(long, default_value = "")]
    requirements_en: String,
    #[arg(long, default_value = "")]
    requirements_ar: String,
    /// Post as hidden instead of live
    #[arg(long)]
    inactive: bool,
}

#[derive(Subcommand)]
enum ApplicationsCommand {
    /// List applications, optionally scoped to one job or status
    List {
        /// Career id to scope by
        #[arg(long)]
        job: Option<String>,
        /// Pending, Reviewed, Accepted or Rejected
        #[arg(long)]
        status: Option<String>,
    },
    /// Show one application
    Show { id: String },
    /// Move an application to a new review status
    SetStatus { id: String, status: String },
    /// Delete one application (asks for confirmation)
    Delete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ServicesCommand {
    /// List service sections
    List,
    /// Show one section with its items
    Show { id: String },
    /// Add a section
    Add(SectionFields),
    /// Delete one section (asks for confirmation)
    Delete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
    /// Delete several sections in one call
    BulkDelete {
        ids: Vec<String>,
        #[arg(long)]
        yes: bool,
    },
    /// Add an item to a section (image required)
    AddItem {
        section_id: String,
        #[command(flatten)]
        fields: ItemFields,
    },
    /// Delete an item from a section
    DeleteItem { section_id: String, item_id: String },
}

#[derive(Args)]
struct SectionFields {
    #[arg(long)]
    title_en: String,
    #[arg(long)]
    title_ar: String,
    #[arg(long)]
    sub_title_en: String,
    #[arg(long)]
    sub_title_ar: String,
    #[arg(long)]
    description_en: String,
    #[arg(long)]
    description_ar: String,
    /// Optional header image
    #[arg(long)]
    image: Option<PathBuf>,
    #[arg(long)]
    inactive: bool,
}

#[derive(Args)]
struct ItemFields {
    #[arg(long)]
    title_en: String,
    #[arg(long)]
    title_ar: String,
    #[arg(long)]
    category_en: String,
    #[arg(long)]
    category_ar: String,
    #[arg(long)]
    description_en: String,
    #[arg(long)]
    description_ar: String,
    #[arg(long)]
    order: Option<i32>,
    #[arg(long)]
    image: Option<PathBuf>,
}

#[derive(Subcommand)]
enum UsersCommand {
    /// List console accounts
    List,
    /// Create an account
    Create {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// user, admin or hr
        #[arg(long, default_value = "admin")]
        role: String,
        #[arg(long)]
        inactive: bool,
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Delete one account (asks for confirmation)
    Delete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
    /// Delete several accounts in one call
    BulkDelete {
        ids: Vec<String>,
        #[arg(long)]
        yes: bool,
    },
}

/// Prints the transient notifications the dashboard would toast.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        println!("✔ {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("✖ {message}");
    }
}

pub async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let store = Arc::new(FileSessionStore::new(config.session_dir.clone()));
    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier);
    let api = ApiClient::new(config.api_base_url.clone(), store.clone());
    let guard = SessionGuard::new(store);

    match cli.command {
        Command::Login { email, password } => {
            if guard.already_signed_in() {
                println!("Already signed in.");
                return Ok(());
            }
            let request = LoginRequest::new(&email, &password)?;
            let use_case = LoginUseCase::new(
                AuthGatewayHttp::new(api.clone()),
                FileSessionStore::new(config.session_dir.clone()),
            );
            match use_case.execute(request).await {
                Ok(user) => {
                    notifier.success("Login successful");
                    println!("Signed in as {} <{}>", user.user_name, user.email);
                }
                Err(error) => bail!("{}", error.user_message()),
            }
        }

        Command::Logout => {
            let use_case = LogoutUseCase::new(
                AuthGatewayHttp::new(api.clone()),
                FileSessionStore::new(config.session_dir.clone()),
            );
            use_case.execute().await?;
            println!("Signed out.");
        }

        Command::ForgotPassword { email } => {
            let use_case = ForgotPasswordUseCase::new(AuthGatewayHttp::new(api.clone()));
            let ticket = use_case.execute(&email).await?;
            println!("{}", ticket.message);
            if let Some(token) = ticket.reset_token {
                println!("Reset token: {token}");
            }
        }

        Command::ResetPassword { token, password } => {
            let use_case = ResetPasswordUseCase::new(AuthGatewayHttp::new(api.clone()));
            use_case.execute(&token, &password).await?;
            notifier.success("Password reset");
        }

        Command::ChangePassword { email, password } => {
            ensure_signed_in(&guard)?;
            let use_case = ChangePasswordUseCase::new(AuthGatewayHttp::new(api.clone()));
            use_case.execute(&email, &password).await?;
            notifier.success("Password changed");
        }

        Command::Stats => {
            ensure_signed_in(&guard)?;
            let overview =
                DashboardOverview::new(Arc::new(StatsGatewayHttp::new(api.clone())), notifier);
            let stats = overview.load().await;
            println!("Applications: {}", stats.applications);
            println!("Services:     {}", stats.services);
            println!("Careers:      {}", stats.careers);
        }

        Command::Careers { command } => {
            ensure_signed_in(&guard)?;
            run_careers(command, api, notifier).await?;
        }

        Command::Applications { command } => {
            ensure_signed_in(&guard)?;
            run_applications(command, api, notifier).await?;
        }

        Command::Services { command } => {
            ensure_signed_in(&guard)?;
            run_services(command, api, notifier).await?;
        }

        Command::Users { command } => {
            ensure_signed_in(&guard)?;
            run_users(command, api, notifier).await?;
        }
    }

    Ok(())
}

async fn run_careers(
    command: CareersCommand,
    api: ApiClient,
    notifier: Arc<dyn Notifier>,
) -> anyhow::Result<()> {
    let gateway = Arc::new(CareerGatewayHttp::new(api));
    let mut controller = CareersController::new(gateway.clone(), notifier);

    match command {
        CareersCommand::List {
            department,
            location,
            active,
        } => {
            controller.mount().await;
            controller.set_filter(CareerFilter {
                department: choice(department),
                location: choice(location),
                active: choice(active),
            });

            let counts = controller.counts();
            println!(
                "{} positions ({} active, {} inactive)",
                counts.total, counts.active, counts.inactive
            );
            for career in controller.filtered() {
                print_career_row(career);
            }
        }

        CareersCommand::Show { id } => {
            use crate::modules::careers::application::ports::outgoing::CareerGateway;
            let career = gateway.get(&EntityId::from(id.as_str())).await?;
            print_career(&career);
        }

        CareersCommand::Post(fields) => {
            controller.mount().await;
            let mut form = CareerForm::new();
            form.title_en = fields.title_en;
            form.title_ar = fields.title_ar;
            form.department_en = fields.department_en;
            form.department_ar = fields.department_ar;
            form.location_en = fields.location_en;
            form.location_ar = fields.location_ar;
            form.employment_type_en = fields.employment_type_en;
            form.employment_type_ar = fields.employment_type_ar;
            form.short_description_en = fields.short_description_en;
            form.short_description_ar = fields.short_description_ar;
            form.description_en = fields.description_en;
            form.description_ar = fields.description_ar;
            form.responsibilities_en = fields.responsibilities_en;
            form.responsibilities_ar = fields.responsibilities_ar;
            form.requirements_en = fields.requirements_en;
            form.requirements_ar = fields.requirements_ar;
            form.is_active = !fields.inactive;
            finish_submit(controller.submit(&form).await)?;
        }

        CareersCommand::Toggle { id } => {
            controller.mount().await;
            controller.toggle_status(&EntityId::from(id.as_str())).await;
        }

        CareersCommand::Delete { id, yes } => {
            controller.mount().await;
            let id = EntityId::from(id.as_str());
            let Some(pending) = controller.request_delete(&id) else {
                bail!("No career with id {id}");
            };
            if confirmed(yes, "Delete this job post? This action cannot be undone.")? {
                controller.confirm_delete(pending).await;
            }
        }

        CareersCommand::BulkDelete { ids, yes } => {
            controller.mount().await;
            for id in &ids {
                controller.toggle_selected(&EntityId::from(id.as_str()));
            }
            let prompt = format!("Delete {} job post(s)? This action cannot be undone.", ids.len());
            if confirmed(yes, &prompt)? {
                controller.confirm_bulk_delete().await;
            }
        }
    }

    Ok(())
}

async fn run_applications(
    command: ApplicationsCommand,
    api: ApiClient,
    notifier: Arc<dyn Notifier>,
) -> anyhow::Result<()> {
    let gateway = Arc::new(ApplicationGatewayHttp::new(api));
    let mut controller = ApplicationsController::new(gateway.clone(), notifier);

    match command {
        ApplicationsCommand::List { job, status } => {
            match &job {
                Some(career_id) => {
                    controller
                        .mount_for_career(&EntityId::from(career_id.as_str()))
                        .await;
                }
                None => controller.mount().await,
            }

            let status = status.map(|raw| parse_status(&raw)).transpose()?;
            controller.set_filter(ApplicationFilter {
                career: FilterChoice::All,
                status: choice(status),
            });

            let counts = controller.counts();
            println!(
                "{} applications (pending {}, reviewed {}, accepted {}, rejected {})",
                counts.total(),
                counts.pending,
                counts.reviewed,
                counts.accepted,
                counts.rejected
            );
            for application in controller.filtered() {
                print_application_row(application);
            }
        }

        ApplicationsCommand::Show { id } => {
            use crate::modules::applications::application::ports::outgoing::ApplicationGateway;
            let application = gateway.get(&EntityId::from(id.as_str())).await?;
            print_application(&application);
        }

        ApplicationsCommand::SetStatus { id, status } => {
            controller.mount().await;
            let status = parse_status(&status)?;
            controller.set_status(&EntityId::from(id.as_str()), status).await;
        }

        ApplicationsCommand::Delete { id, yes } => {
            controller.mount().await;
            let id = EntityId::from(id.as_str());
            let Some(pending) = controller.request_delete(&id) else {
                bail!("No application with id {id}");
            };
            if confirmed(yes, "Are you sure you want to delete this application?")? {
                controller.confirm_delete(pending).await;
            }
        }
    }

    Ok(())
}

async fn run_services(
    command: ServicesCommand,
    api: ApiClient,
    notifier: Arc<dyn Notifier>,
) -> anyhow::Result<()> {
    let gateway = Arc::new(ServiceGatewayHttp::new(api));
    let mut controller = ServicesController::new(gateway.clone(), notifier);

    match command {
        ServicesCommand::List => {
            controller.mount().await;
            let counts = controller.counts();
            println!(
                "{} sections ({} active), {} items total",
                counts.total, counts.active, counts.items
            );
            for section in controller.sections() {
                println!(
                    "{:<26} {:<30} {:>3} items  {}",
                    section.id,
                    section.header.title.en,
                    section.services.len(),
                    active_label(section.is_active)
                );
            }
        }

        ServicesCommand::Show { id } => {
            use crate::modules::services::application::ports::outgoing::ServiceGateway;
            let section = gateway.get(&EntityId::from(id.as_str())).await?;
            println!("{} / {}", section.header.title.en, section.header.title.ar);
            println!("{}", section.header.description.en);
            for item in &section.services {
                println!(
                    "  [{}] {:<28} {}",
                    item.order, item.title.en, item.category.en
                );
            }
        }

        ServicesCommand::Add(fields) => {
            controller.mount().await;
            let mut form = SectionForm::new();
            form.title_en = fields.title_en;
            form.title_ar = fields.title_ar;
            form.sub_title_en = fields.sub_title_en;
            form.sub_title_ar = fields.sub_title_ar;
            form.description_en = fields.description_en;
            form.description_ar = fields.description_ar;
            form.is_active = !fields.inactive;
            if let Some(path) = &fields.image {
                form.select_image(ImageUpload::from_path(path)?);
            }
            finish_submit(controller.submit_section(&form).await)?;
        }

        ServicesCommand::Delete { id, yes } => {
            controller.mount().await;
            let id = EntityId::from(id.as_str());
            let Some(pending) = controller.request_delete(&id) else {
                bail!("No service section with id {id}");
            };
            let prompt = "Delete this service section and all items inside it? \
                          This action cannot be undone.";
            if confirmed(yes, prompt)? {
                controller.confirm_delete(pending).await;
            }
        }

        ServicesCommand::BulkDelete { ids, yes } => {
            controller.mount().await;
            for id in &ids {
                controller.toggle_selected(&EntityId::from(id.as_str()));
            }
            let prompt = format!("Delete {} section(s)? This action cannot be undone.", ids.len());
            if confirmed(yes, &prompt)? {
                controller.confirm_bulk_delete().await;
            }
        }

        ServicesCommand::AddItem { section_id, fields } => {
            controller.mount().await;
            let section_id = EntityId::from(section_id.as_str());
            let Some(section) = controller.section(&section_id).cloned() else {
                bail!("No service section with id {section_id}");
            };

            let mut form = ItemForm::new(&section);
            form.title_en = fields.title_en;
            form.title_ar = fields.title_ar;
            form.category_en = fields.category_en;
            form.category_ar = fields.category_ar;
            form.description_en = fields.description_en;
            form.description_ar = fields.description_ar;
            if let Some(order) = fields.order {
                form.order = order;
            }
            if let Some(path) = &fields.image {
                form.select_image(ImageUpload::from_path(path)?);
            }
            finish_submit(controller.submit_item(&section_id, &form).await)?;
        }

        ServicesCommand::DeleteItem {
            section_id,
            item_id,
        } => {
            controller.mount().await;
            controller
                .delete_item(
                    &EntityId::from(section_id.as_str()),
                    &EntityId::from(item_id.as_str()),
                )
                .await;
        }
    }

    Ok(())
}

async fn run_users(
    command: UsersCommand,
    api: ApiClient,
    notifier: Arc<dyn Notifier>,
) -> anyhow::Result<()> {
    let gateway = Arc::new(UserGatewayHttp::new(api));
    let mut controller = UsersController::new(gateway, notifier);

    match command {
        UsersCommand::List => {
            controller.mount().await;
            let counts = controller.counts();
            println!(
                "{} users ({} administrators, {} active)",
                counts.total, counts.admins, counts.active
            );
            for user in controller.users() {
                println!(
                    "{:<26} {:<20} {:<24} {:<6} {}",
                    user.id,
                    user.user_name,
                    user.email,
                    user.role,
                    active_label(user.is_active)
                );
            }
        }

        UsersCommand::Create {
            username,
            email,
            password,
            role,
            inactive,
            image,
        } => {
            controller.mount().await;
            let role: UserRole = match role.parse() {
                Ok(role) => role,
                Err(error) => bail!("{error}"),
            };
            let mut form = UserForm::new();
            form.user_name = username;
            form.email = email;
            form.password = password;
            form.role = role;
            form.is_active = !inactive;
            if let Some(path) = &image {
                form.select_image(ImageUpload::from_path(path)?);
            }
            finish_submit(controller.submit(&form).await)?;
        }

        UsersCommand::Delete { id, yes } => {
            controller.mount().await;
            let id = EntityId::from(id.as_str());
            let Some(pending) = controller.request_delete(&id) else {
                bail!("No user with id {id}");
            };
            let prompt = "Are you absolutely sure? This will permanently delete the user account.";
            if confirmed(yes, prompt)? {
                controller.confirm_delete(pending).await;
            }
        }

        UsersCommand::BulkDelete { ids, yes } => {
            controller.mount().await;
            for id in &ids {
                controller.toggle_selected(&EntityId::from(id.as_str()));
            }
            let prompt = format!("Delete {} user(s)? This action cannot be undone.", ids.len());
            if confirmed(yes, &prompt)? {
                controller.confirm_bulk_delete().await;
            }
        }
    }

    Ok(())
}

fn ensure_signed_in<S>(guard: &SessionGuard<S>) -> anyhow::Result<()>
where
    S: crate::modules::session::application::ports::outgoing::SessionStore,
{
    match guard.check() {
        GuardDecision::Proceed => Ok(()),
        GuardDecision::RedirectToLogin => {
            bail!("You are signed out. Run `macc-admin login` first.")
        }
    }
}

fn choice<T>(value: Option<T>) -> FilterChoice<T> {
    match value {
        Some(value) => FilterChoice::Only(value),
        None => FilterChoice::All,
    }
}

fn parse_status(raw: &str) -> anyhow::Result<ApplicationStatus> {
    raw.parse()
        .map_err(|error| anyhow::anyhow!("{error} (expected Pending, Reviewed, Accepted or Rejected)"))
}

fn finish_submit(outcome: SubmitOutcome) -> anyhow::Result<()> {
    match outcome {
        SubmitOutcome::Saved => Ok(()),
        SubmitOutcome::Invalid(errors) => {
            for (field, message) in errors.iter() {
                eprintln!("  {field}: {message}");
            }
            bail!("Validation failed; nothing was sent")
        }
        SubmitOutcome::Rejected => bail!("The backend rejected the request"),
    }
}

fn confirmed(skip_prompt: bool, prompt: &str) -> anyhow::Result<bool> {
    if skip_prompt {
        return Ok(true);
    }
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let accepted = matches!(answer.trim(), "y" | "Y" | "yes");
    if !accepted {
        println!("Cancelled.");
    }
    Ok(accepted)
}

fn active_label(active: bool) -> &'static str {
    if active {
        "Active"
    } else {
        "Inactive"
    }
}

fn print_career_row(career: &Career) {
    println!(
        "{:<26} {:<28} {:<16} {:<12} {}",
        career.id,
        career.title.en,
        career.department.en,
        career.location.en,
        active_label(career.is_active)
    );
}

fn print_career(career: &Career) {
    println!("{} / {}", career.title.en, career.title.ar);
    println!(
        "{} / {} / {}",
        career.department.en, career.location.en, career.employment_type.en
    );
    println!("Status: {}", active_label(career.is_active));
    if let Some(description) = &career.description {
        println!("\n{}", description.en);
    }
    if !career.responsibilities.en.is_empty() {
        println!("\nResponsibilities:");
        for line in &career.responsibilities.en {
            println!("  - {line}");
        }
    }
    if !career.requirements.en.is_empty() {
        println!("\nRequirements:");
        for line in &career.requirements.en {
            println!("  - {line}");
        }
    }
}

fn print_application_row(application: &Application) {
    let job = application
        .career
        .title_en()
        .unwrap_or(application.career.id().as_str());
    println!(
        "{:<26} {:<22} {:<26} {:<10} {}",
        application.id,
        application.full_name,
        application.email,
        application.status,
        job
    );
}

fn print_application(application: &Application) {
    println!("{} <{}>", application.full_name, application.email);
    println!("Phone:  {}", application.phone);
    println!("Status: {}", application.status);
    match application.career.title_en() {
        Some(title) => println!("Job:    {title}"),
        None => println!("Job:    {} (not populated)", application.career.id()),
    }
    println!("CV:     {}", application.cv.file_url);
    println!("Applied: {}", application.created_at.format("%Y-%m-%d %H:%M"));
}
