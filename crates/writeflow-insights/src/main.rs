use chrono::{Duration, Utc};
use clap::{Arg, ArgAction, Command};
use writeflow_core::{
    Performance, Role, Task, TaskDraft, TaskId, TaskStatus, TeamHandle, Viewer, Writer, WriterId,
    WriterStatus,
};
use writeflow_insights::{
    pending_reviews, role_stats, roster_name, status_distribution, visible_tasks,
    weekly_performance,
};

struct SampleTeam {
    store: TeamHandle,
    admin: Viewer,
    writer: Viewer,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Command::new("writeflow")
        .version("0.1.0")
        .about("WriteFlow team dashboard demo")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("dashboard")
                .about("Print the role-scoped dashboard over sample data")
                .arg(
                    Arg::new("role")
                        .long("role")
                        .default_value("admin")
                        .value_parser(["admin", "writer"])
                        .help("View the dashboard as this role"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("activity")
                .about("Walk a task through review and print the change log"),
        );

    match cli.get_matches().subcommand() {
        Some(("dashboard", args)) => {
            let role = args.get_one::<String>("role").unwrap();
            let json = args.get_flag("json");
            run_dashboard(role, json);
        }
        Some(("activity", _)) => run_activity(),
        _ => {}
    }
}

fn run_dashboard(role: &str, json: bool) {
    let team = seed();
    let viewer = if role == "writer" {
        team.writer
    } else {
        team.admin
    };

    let tasks = team.store.tasks();
    let writers = team.store.writers();
    let visible = visible_tasks(&tasks, &viewer);
    let stats = role_stats(&visible, &writers, &viewer);
    let weekly = weekly_performance(&visible, &writers, &viewer);
    let reviews = pending_reviews(&tasks, &viewer);
    let distribution = status_distribution(&visible);

    if json {
        let payload = serde_json::json!({
            "viewer": viewer,
            "stats": stats,
            "weekly": weekly,
            "pending_reviews": reviews,
            "status_distribution": distribution,
        });
        println!("{}", serde_json::to_string_pretty(&payload).unwrap());
        return;
    }

    let title = if viewer.is_admin() {
        "Team Dashboard"
    } else {
        "My Dashboard"
    };
    println!("{title} - {} ({})", viewer.name, viewer.role);
    println!();
    println!("Tasks:      {} total, {} active", stats.total_tasks, stats.active_tasks);
    println!("Submitted:  {}", stats.submitted_tasks);
    println!("Completed:  {}", stats.completed_tasks);
    if viewer.is_admin() {
        println!("Reviews:    {} pending", reviews.len());
        println!("Writers:    {} active", stats.active_writers);
    } else if let Some(percent) = stats.deadlines_met_percent() {
        println!("Deadlines:  {percent}% met");
    }

    println!();
    println!("This week:  {} words, {} tasks, {:.1}/5 rating",
        weekly.total_words, weekly.tasks_completed, weekly.average_rating);

    println!();
    println!("Status distribution:");
    for entry in &distribution {
        println!("  {:<14} {:>3}  ({:.0}%)", entry.status.to_string(), entry.count, entry.share);
    }

    println!();
    println!("Visible tasks:");
    for task in &visible {
        let assignee = task
            .assigned_to
            .first()
            .map_or_else(|| "Unassigned".to_string(), |id| roster_name(&writers, *id));
        let due = task
            .deadline
            .map_or_else(|| "no deadline".to_string(), |d| format!("due {d}"));
        println!("  [{:<14}] {} - {assignee}, {} words, {due}",
            task.status.to_string(), task.title, task.word_count);
    }

    if viewer.is_admin() && !reviews.is_empty() {
        println!();
        println!("Pending reviews:");
        for task in &reviews {
            let by = task
                .assigned_to
                .first()
                .map_or_else(|| "Unassigned".to_string(), |id| roster_name(&writers, *id));
            println!("  {} - by {by}", task.title);
        }
    }
}

fn run_activity() {
    let team = seed();

    let draft = TaskDraft::new(
        "Landing Page Refresh",
        "Rewrite the hero copy and feature blurbs for the spring release",
    )
    .with_word_count(600)
    .with_deadline(Utc::now().date_naive() + Duration::days(4))
    .assign_to(team.writer.id)
    .with_tags(vec!["product".to_string(), "copy".to_string()]);

    let task = team.store.create_task(draft, &team.admin).expect("seeded roster");
    for status in [TaskStatus::InProgress, TaskStatus::Submitted] {
        team.store
            .set_task_status(task.id, status, &team.writer)
            .expect("writer advances own task");
    }
    for status in [TaskStatus::InReview, TaskStatus::Approved] {
        team.store
            .set_task_status(task.id, status, &team.admin)
            .expect("admin reviews");
    }

    println!("Recent activity:");
    for event in team.store.change_log().recent(10) {
        println!(
            "  {}  {:<16} {}",
            event.timestamp.format("%H:%M:%S"),
            event.action,
            event.detail
        );
    }
}

/// The demo team: two seeded writers, the writer persona used by the role
/// toggle, and the managing admin.
fn seed() -> SampleTeam {
    let store = TeamHandle::new();
    let today = Utc::now().date_naive();

    let manager = writer_record(
        "Team Manager",
        "admin@company.com",
        "Team manager and content strategist",
        Role::Admin,
        vec!["Team Management", "Content Strategy"],
        vec!["management"],
        Performance::default(),
    );
    let sarah = writer_record(
        "Sarah Wilson",
        "sarah@company.com",
        "Experienced content writer specializing in tech and marketing",
        Role::Writer,
        vec!["Blog Writing", "Technical Content", "SEO"],
        vec!["blog", "technical"],
        Performance {
            completed_tasks: 24,
            total_word_count: 48_000,
            deadlines_met: 22,
            average_rating: 4.8,
            weekly_word_count: 3200,
            weekly_tasks_completed: 2,
        },
    );
    let mike = writer_record(
        "Mike Chen",
        "mike@company.com",
        "Creative copywriter with social media expertise",
        Role::Writer,
        vec!["Social Media", "Creative Copy", "Brand Voice"],
        vec!["social-media", "creative"],
        Performance {
            completed_tasks: 18,
            total_word_count: 32_000,
            deadlines_met: 17,
            average_rating: 4.6,
            weekly_word_count: 1800,
            weekly_tasks_completed: 3,
        },
    );
    let alex = writer_record(
        "Alex Chen",
        "alex@company.com",
        "Content writer focused on technical documentation",
        Role::Writer,
        vec!["Technical Writing", "Documentation", "API Guides"],
        vec!["technical", "documentation"],
        Performance {
            completed_tasks: 15,
            total_word_count: 28_000,
            deadlines_met: 14,
            average_rating: 4.7,
            weekly_word_count: 2100,
            weekly_tasks_completed: 1,
        },
    );

    let admin = Viewer::new(manager.id, manager.name.clone(), Role::Admin);
    let writer = Viewer::new(alex.id, alex.name.clone(), Role::Writer);

    let seeds = [
        (
            "Blog Post: AI in Content Marketing",
            "Write a comprehensive guide about AI tools in content marketing",
            2000,
            3,
            sarah.id,
            TaskStatus::InProgress,
            vec!["blog", "ai", "marketing"],
        ),
        (
            "Social Media Copy - Product Launch",
            "Create engaging social media posts for new product launch",
            500,
            1,
            mike.id,
            TaskStatus::Pending,
            vec!["social-media", "product-launch"],
        ),
        (
            "Email Newsletter - Weekly Roundup",
            "Write weekly newsletter with industry insights",
            800,
            2,
            sarah.id,
            TaskStatus::Submitted,
            vec!["newsletter", "email"],
        ),
        (
            "Product Description - New Features",
            "Create compelling product descriptions for new feature set",
            1200,
            4,
            sarah.id,
            TaskStatus::InReview,
            vec!["product", "features"],
        ),
        (
            "API Documentation Update",
            "Update REST API documentation with new endpoints",
            1500,
            5,
            alex.id,
            TaskStatus::InProgress,
            vec!["documentation", "api"],
        ),
        (
            "User Guide - Advanced Features",
            "Create comprehensive user guide for advanced platform features",
            2500,
            7,
            alex.id,
            TaskStatus::Pending,
            vec!["user-guide", "features"],
        ),
    ];

    for (title, description, words, due_in, assignee, status, tags) in seeds {
        let now = Utc::now();
        store.load_task(Task {
            id: TaskId::new(),
            title: title.to_string(),
            description: description.to_string(),
            word_count: words,
            deadline: Some(today + Duration::days(due_in)),
            assigned_to: vec![assignee],
            status,
            tags: tags.into_iter().map(str::to_string).collect(),
            created_by: admin.id,
            created_at: now,
            submitted_at: matches!(status, TaskStatus::Submitted | TaskStatus::InReview)
                .then(|| now - Duration::days(1)),
            reviewed_at: (status == TaskStatus::InReview).then_some(now),
        });
    }

    for record in [manager, sarah, mike, alex] {
        store.load_writer(record);
    }

    SampleTeam {
        store,
        admin,
        writer,
    }
}

#[allow(clippy::too_many_arguments)]
fn writer_record(
    name: &str,
    email: &str,
    bio: &str,
    role: Role,
    expertise: Vec<&str>,
    team_tags: Vec<&str>,
    performance: Performance,
) -> Writer {
    Writer {
        id: WriterId::new(),
        name: name.to_string(),
        email: email.to_string(),
        bio: bio.to_string(),
        role,
        expertise: expertise.into_iter().map(str::to_string).collect(),
        status: WriterStatus::Active,
        team_tags: team_tags.into_iter().map(str::to_string).collect(),
        performance,
    }
}
