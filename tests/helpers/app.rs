#![allow(dead_code)]
use chrono::{DateTime, NaiveDate, Utc};
use leavedesk::config::AiConfig;
use leavedesk::domain::ports::{
    BalanceRepository, Clock, CompanyRepository, HolidayRepository, LeaveRepository,
    LeaveTypeRepository, SuggestionProvider, UserRepository,
};
use leavedesk::events::EventBus;
use leavedesk::infrastructure::memory::{
    InMemoryBalanceRepository, InMemoryCompanyRepository, InMemoryHolidayRepository,
    InMemoryLeaveRepository, InMemoryLeaveTypeRepository, InMemoryUserRepository,
};
use leavedesk::models::{Company, Holiday, LeaveType, Role, User, WorkWeek};
use leavedesk::services::{
    BalanceService, CalendarService, HolidayService, LeaveService, SuggestionService,
};
use std::sync::Arc;
use std::time::Duration;

/// Deterministic clock pinned to noon UTC on a fixed date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
            .and_hms_opt(12, 0, 0)
            .expect("valid time")
            .and_utc()
    }
}

/// Fully wired in-memory service stack seeded with one company, a
/// Monday-Friday work week, two leave types and three users.
pub struct TestApp {
    pub company: Company,
    pub other_company: Company,
    pub employee: User,
    pub manager: User,
    pub hr: User,
    pub admin: User,
    pub other_manager: User,
    pub casual: LeaveType,
    pub sick: LeaveType,
    pub today: NaiveDate,

    pub company_repo: Arc<InMemoryCompanyRepository>,
    pub user_repo: Arc<InMemoryUserRepository>,
    pub holiday_repo: Arc<InMemoryHolidayRepository>,
    pub leave_repo: Arc<InMemoryLeaveRepository>,
    pub leave_type_repo: Arc<InMemoryLeaveTypeRepository>,
    pub balance_repo: Arc<InMemoryBalanceRepository>,

    pub event_bus: EventBus,
    pub calendar: Arc<CalendarService>,
    pub leaves: LeaveService,
    pub holidays: HolidayService,
    pub balances: BalanceService,
    pub suggestions: SuggestionService,
}

impl TestApp {
    pub async fn new(today: NaiveDate) -> Self {
        let company_repo = Arc::new(InMemoryCompanyRepository::new());
        let user_repo = Arc::new(InMemoryUserRepository::new());
        let holiday_repo = Arc::new(InMemoryHolidayRepository::new());
        let leave_repo = Arc::new(InMemoryLeaveRepository::new());
        let leave_type_repo = Arc::new(InMemoryLeaveTypeRepository::new());
        let balance_repo = Arc::new(InMemoryBalanceRepository::new());
        let event_bus = EventBus::new(100);
        let clock: Arc<dyn Clock> = Arc::new(FixedClock(today));

        let company = Company::new(
            "Acme".to_string(),
            "acme.com".to_string(),
            "Pune".to_string(),
        );
        let other_company = Company::new(
            "Globex".to_string(),
            "globex.com".to_string(),
            "Berlin".to_string(),
        );
        company_repo.create_company(&company).await.unwrap();
        company_repo.create_company(&other_company).await.unwrap();
        company_repo
            .set_work_week(&WorkWeek::new(company.id.clone(), &[1, 2, 3, 4, 5]).unwrap())
            .await
            .unwrap();

        let employee = User::new(
            "erin".to_string(),
            "erin@acme.com".to_string(),
            Role::Employee,
            Some(company.id.clone()),
        );
        let manager = User::new(
            "mira".to_string(),
            "mira@acme.com".to_string(),
            Role::Manager,
            Some(company.id.clone()),
        );
        let hr = User::new(
            "hana".to_string(),
            "hana@acme.com".to_string(),
            Role::Hr,
            Some(company.id.clone()),
        );
        let admin = User::new(
            "root".to_string(),
            "root@leavedesk.dev".to_string(),
            Role::Admin,
            None,
        );
        let other_manager = User::new(
            "otto".to_string(),
            "otto@globex.com".to_string(),
            Role::Manager,
            Some(other_company.id.clone()),
        );
        for user in [&employee, &manager, &hr, &admin, &other_manager] {
            user_repo.create_user(user).await.unwrap();
        }

        let casual = LeaveType::new("Casual Leave".to_string(), 12);
        let sick = LeaveType::new("Sick Leave".to_string(), 8);
        leave_type_repo.create(&casual).await.unwrap();
        leave_type_repo.create(&sick).await.unwrap();

        let calendar = Arc::new(CalendarService::new(
            company_repo.clone(),
            holiday_repo.clone(),
            leave_repo.clone(),
            leave_type_repo.clone(),
            user_repo.clone(),
            clock.clone(),
        ));

        let leaves = LeaveService::new(
            leave_repo.clone(),
            leave_type_repo.clone(),
            balance_repo.clone(),
            user_repo.clone(),
            event_bus.clone(),
        );

        let holidays = HolidayService::new(
            holiday_repo.clone(),
            user_repo.clone(),
            event_bus.clone(),
        );

        let balances = BalanceService::new(
            balance_repo.clone(),
            leave_type_repo.clone(),
            user_repo.clone(),
            event_bus.clone(),
        );

        let suggestions = SuggestionService::new(
            calendar.clone(),
            company_repo.clone(),
            holiday_repo.clone(),
            leave_repo.clone(),
            leave_type_repo.clone(),
            balance_repo.clone(),
            user_repo.clone(),
            clock.clone(),
            Duration::from_secs(5),
            90,
        );

        Self {
            company,
            other_company,
            employee,
            manager,
            hr,
            admin,
            other_manager,
            casual,
            sick,
            today,
            company_repo,
            user_repo,
            holiday_repo,
            leave_repo,
            leave_type_repo,
            balance_repo,
            event_bus,
            calendar,
            leaves,
            holidays,
            balances,
            suggestions,
        }
    }

    /// Seed a company holiday directly, bypassing the permission check.
    pub async fn seed_holiday(&self, date: NaiveDate, name: &str) -> Holiday {
        let holiday = Holiday::new(self.company.id.clone(), date, name.to_string());
        self.holiday_repo.create(&holiday).await.unwrap();
        holiday
    }

    pub async fn seed_recurring_holiday(&self, date: NaiveDate, name: &str) -> Holiday {
        let holiday = Holiday::new(self.company.id.clone(), date, name.to_string()).recurring();
        self.holiday_repo.create(&holiday).await.unwrap();
        holiday
    }

    pub async fn seed_optional_holiday(&self, date: NaiveDate, name: &str) -> Holiday {
        let holiday = Holiday::new(self.company.id.clone(), date, name.to_string()).optional();
        self.holiday_repo.create(&holiday).await.unwrap();
        holiday
    }

    /// A suggestion service wired like the default one but with a custom
    /// provider and enhancement timeout.
    pub fn suggestions_with(
        &self,
        provider: Arc<dyn SuggestionProvider>,
        timeout: Duration,
    ) -> SuggestionService {
        SuggestionService::new(
            self.calendar.clone(),
            self.company_repo.clone() as Arc<dyn CompanyRepository>,
            self.holiday_repo.clone() as Arc<dyn HolidayRepository>,
            self.leave_repo.clone() as Arc<dyn LeaveRepository>,
            self.leave_type_repo.clone() as Arc<dyn LeaveTypeRepository>,
            self.balance_repo.clone() as Arc<dyn BalanceRepository>,
            self.user_repo.clone() as Arc<dyn UserRepository>,
            Arc::new(FixedClock(self.today)),
            timeout,
            90,
        )
        .with_provider(provider)
    }
}

/// An AI config with no key, for providers that must report Disabled.
pub fn disabled_ai_config() -> AiConfig {
    AiConfig::disabled("test-model")
}
