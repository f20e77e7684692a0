//! Static sample data rendered by the role dashboards.
//!
//! Nothing here is persisted or fetched; every list is rebuilt on render.

use serde::{Deserialize, Serialize};

/// Stock at or below this level is reported as low.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub description: String,
    /// Percentage change against the previous period.
    pub trend: i32,
}

impl StatCard {
    fn new(title: &str, value: &str, description: &str, trend: i32) -> Self {
        Self {
            title: title.to_string(),
            value: value.to_string(),
            description: description.to_string(),
            trend,
        }
    }

    pub fn trend_is_positive(&self) -> bool {
        self.trend >= 0
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Presence {
    Online,
    Busy,
    Offline,
}

impl Presence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Presence::Online => "online",
            Presence::Busy => "busy",
            Presence::Offline => "offline",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamMember {
    pub name: String,
    pub position: String,
    pub presence: Presence,
    pub open_tasks: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub title: String,
    pub due: String,
    pub priority: Priority,
    pub done: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In stock",
            StockStatus::LowStock => "Low stock",
            StockStatus::OutOfStock => "Out of stock",
        }
    }
}

impl Product {
    pub fn stock_status(&self) -> StockStatus {
        match self.stock {
            0 => StockStatus::OutOfStock,
            s if s <= LOW_STOCK_THRESHOLD => StockStatus::LowStock,
            _ => StockStatus::InStock,
        }
    }
}

/// Case-insensitive substring match on name, SKU and category.
pub fn filter_products(products: &[Product], query: &str) -> Vec<Product> {
    let query = query.trim().to_lowercase();
    products
        .iter()
        .filter(|p| {
            query.is_empty()
                || p.name.to_lowercase().contains(&query)
                || p.sku.to_lowercase().contains(&query)
                || p.category.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Counts per stock status, shown under the product table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StockSummary {
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

pub fn stock_summary(products: &[Product]) -> StockSummary {
    products
        .iter()
        .fold(StockSummary::default(), |mut acc, p| {
            match p.stock_status() {
                StockStatus::InStock => acc.in_stock += 1,
                StockStatus::LowStock => acc.low_stock += 1,
                StockStatus::OutOfStock => acc.out_of_stock += 1,
            }
            acc
        })
}

/// Which screen the product manager is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductView {
    #[default]
    List,
    Detail(u32),
    Edit(u32),
    Create,
}

impl ProductView {
    /// Leave a form after "saving". Nothing is written anywhere; the caller
    /// shows the returned notice.
    pub fn submit(self) -> (ProductView, Option<&'static str>) {
        match self {
            ProductView::Create => (ProductView::List, Some("Product created")),
            ProductView::Edit(_) => (ProductView::List, Some("Product updated")),
            other => (other, None),
        }
    }

    /// Deleting is offered from the list and the detail screen only.
    pub fn delete(self) -> (ProductView, Option<&'static str>) {
        match self {
            ProductView::List | ProductView::Detail(_) => {
                (ProductView::List, Some("Product deleted"))
            }
            other => (other, None),
        }
    }

    pub fn selected_id(&self) -> Option<u32> {
        match self {
            ProductView::Detail(id) | ProductView::Edit(id) => Some(*id),
            ProductView::List | ProductView::Create => None,
        }
    }
}

/// How urgently a low-stock item needs restocking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AlertLevel {
    Critical,
    Low,
}

impl AlertLevel {
    pub fn label(&self) -> &'static str {
        match self {
            AlertLevel::Critical => "Critical",
            AlertLevel::Low => "Low",
        }
    }
}

/// A product below its minimum stock level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LowStockAlert {
    pub name: String,
    pub category: String,
    pub stock: u32,
    pub minimum: u32,
    pub level: AlertLevel,
}

impl LowStockAlert {
    /// Units needed to get back to the minimum.
    pub fn shortfall(&self) -> u32 {
        self.minimum.saturating_sub(self.stock)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MovementKind {
    Inbound,
    Outbound,
}

impl MovementKind {
    pub fn label(&self) -> &'static str {
        match self {
            MovementKind::Inbound => "Inbound",
            MovementKind::Outbound => "Outbound",
        }
    }

    pub fn sign(&self) -> char {
        match self {
            MovementKind::Inbound => '+',
            MovementKind::Outbound => '-',
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            MovementKind::Inbound => "↗",
            MovementKind::Outbound => "↙",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockMovement {
    pub item: String,
    pub kind: MovementKind,
    pub quantity: u32,
    pub time: String,
    pub user: String,
}

impl StockMovement {
    pub fn signed_quantity(&self) -> i64 {
        match self.kind {
            MovementKind::Inbound => i64::from(self.quantity),
            MovementKind::Outbound => -i64::from(self.quantity),
        }
    }
}

/// Net change in units across a set of movements.
pub fn net_movement(movements: &[StockMovement]) -> i64 {
    movements.iter().map(StockMovement::signed_quantity).sum()
}

/// Tasks completed against tasks planned for one day of the week.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyPerformance {
    pub day: String,
    pub completed: u32,
    pub planned: u32,
}

impl DailyPerformance {
    /// Completion rate as a whole percentage, capped at 100. A day with
    /// nothing planned counts as 0.
    pub fn percent(&self) -> u32 {
        if self.planned == 0 {
            return 0;
        }
        (self.completed * 100 / self.planned).min(100)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProjectStatus {
    Planning,
    InProgress,
    InReview,
    Delayed,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::InProgress => "In progress",
            ProjectStatus::InReview => "In review",
            ProjectStatus::Delayed => "Delayed",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::InReview => "in-review",
            ProjectStatus::Delayed => "delayed",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectShare {
    pub status: ProjectStatus,
    pub count: u32,
}

/// Each status's share of all projects, as whole percentages.
pub fn distribution_percentages(shares: &[ProjectShare]) -> Vec<(ProjectStatus, u32)> {
    let total: u32 = shares.iter().map(|s| s.count).sum();
    shares
        .iter()
        .map(|s| {
            let pct = if total == 0 { 0 } else { s.count * 100 / total };
            (s.status, pct)
        })
        .collect()
}

pub fn employee_stats() -> Vec<StatCard> {
    vec![
        StatCard::new("Pending tasks", "12", "3 due today", -8),
        StatCard::new("Completed tasks", "28", "This month", 15),
        StatCard::new("Hours worked", "42h", "This week", 5),
        StatCard::new("Active projects", "3", "In progress", 0),
    ]
}

pub fn manager_stats() -> Vec<StatCard> {
    vec![
        StatCard::new("Team size", "24", "2 joined this month", 12),
        StatCard::new("Monthly revenue", "R$ 125.4K", "Target: R$ 150K", 8),
        StatCard::new("Active projects", "18", "5 delivered this week", 15),
        StatCard::new("Performance", "94%", "Above average", 3),
    ]
}

pub fn inventory_stats() -> Vec<StatCard> {
    vec![
        StatCard::new("Total products", "1,847", "23 added today", 5),
        StatCard::new("Low stock", "18", "Needs attention", -12),
        StatCard::new("Stock value", "R$ 284.5K", "Across all products", 7),
        StatCard::new("Movements today", "156", "Inbound and outbound", 23),
    ]
}

pub fn employee_tasks() -> Vec<Task> {
    let task = |title: &str, due: &str, priority, done| Task {
        title: title.to_string(),
        due: due.to_string(),
        priority,
        done,
    };
    vec![
        task("Q3 sales report", "Today", Priority::High, false),
        task("System update", "Yesterday", Priority::Medium, true),
        task("Meeting with client XYZ", "Tomorrow", Priority::High, false),
        task("Team training", "Next week", Priority::Low, false),
    ]
}

pub fn team_members() -> Vec<TeamMember> {
    let member = |name: &str, position: &str, presence, open_tasks| TeamMember {
        name: name.to_string(),
        position: position.to_string(),
        presence,
        open_tasks,
    };
    vec![
        member("Ana Silva", "Developer", Presence::Online, 8),
        member("Carlos Santos", "Designer", Presence::Busy, 12),
        member("Maria Oliveira", "Analyst", Presence::Online, 6),
        member("João Costa", "Tester", Presence::Offline, 4),
        member("Paula Lima", "Developer", Presence::Online, 10),
    ]
}

pub fn sample_products() -> Vec<Product> {
    let product = |id, name: &str, sku: &str, category: &str, price, stock| Product {
        id,
        name: name.to_string(),
        sku: sku.to_string(),
        category: category.to_string(),
        price,
        stock,
    };
    vec![
        product(1, "Smartphone Galaxy S23", "SGS23-001", "Electronics", 2499.99, 15),
        product(2, "Notebook Dell Inspiron", "DI15-002", "Computers", 3299.00, 3),
        product(3, "Fone Bluetooth JBL", "JBL-003", "Audio", 189.90, 0),
        product(4, "Smart TV 55 LG", "LG55-004", "TV & Video", 2199.00, 8),
    ]
}

pub fn low_stock_alerts() -> Vec<LowStockAlert> {
    let alert = |name: &str, category: &str, stock, minimum, level| LowStockAlert {
        name: name.to_string(),
        category: category.to_string(),
        stock,
        minimum,
        level,
    };
    vec![
        alert("Notebook Dell Inspiron", "Electronics", 3, 10, AlertLevel::Critical),
        alert("Ergonomic chair", "Furniture", 7, 15, AlertLevel::Low),
        alert("Samsung 24\" monitor", "Electronics", 5, 12, AlertLevel::Critical),
        alert("HP LaserJet printer", "Equipment", 2, 8, AlertLevel::Critical),
        alert("Office desk", "Furniture", 4, 10, AlertLevel::Low),
    ]
}

pub fn recent_movements() -> Vec<StockMovement> {
    let movement = |item: &str, kind, quantity, time: &str, user: &str| StockMovement {
        item: item.to_string(),
        kind,
        quantity,
        time: time.to_string(),
        user: user.to_string(),
    };
    vec![
        movement("Notebook Lenovo", MovementKind::Inbound, 15, "2 hours ago", "Ana Silva"),
        movement("Wireless mouse", MovementKind::Outbound, 8, "3 hours ago", "Carlos Santos"),
        movement("Mechanical keyboard", MovementKind::Inbound, 20, "5 hours ago", "Maria Oliveira"),
        movement("HD webcam", MovementKind::Outbound, 3, "6 hours ago", "João Costa"),
    ]
}

pub fn weekly_performance() -> Vec<DailyPerformance> {
    let day = |day: &str, completed, planned| DailyPerformance {
        day: day.to_string(),
        completed,
        planned,
    };
    vec![
        day("Mon", 18, 20),
        day("Tue", 22, 22),
        day("Wed", 17, 21),
        day("Thu", 20, 20),
        day("Fri", 15, 19),
        day("Sat", 4, 5),
        day("Sun", 0, 0),
    ]
}

/// Status breakdown of the active projects counted in `manager_stats`.
pub fn project_distribution() -> Vec<ProjectShare> {
    let share = |status, count| ProjectShare { status, count };
    vec![
        share(ProjectStatus::InProgress, 9),
        share(ProjectStatus::InReview, 4),
        share(ProjectStatus::Planning, 3),
        share(ProjectStatus::Delayed, 2),
    ]
}
