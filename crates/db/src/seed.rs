//! Demo data for local development.
//!
//! Every entity is looked up by its natural name before being inserted, so
//! running the seed twice leaves the catalog unchanged. Links, applications
//! and appointments are randomized from the supplied RNG.

use chrono::{Duration, Utc};
use mfc_core::status::{ApplicationState, VALID_APPOINTMENT_STATUSES};
use mfc_core::types::DbId;
use rand::seq::IndexedRandom;
use rand::Rng;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::category::CreateCategory;
use crate::models::employee::CreateEmployee;
use crate::models::news::CreateNews;
use crate::models::office::CreateOffice;
use crate::models::service::CreateService;
use crate::models::user::CreateUser;
use crate::repositories::{
    CategoryRepo, EmployeeRepo, NewsRepo, OfficeRepo, OfficeServiceRepo, ServiceRepo, UserRepo,
};

const CATEGORIES: &[&str] = &[
    "Паспортные услуги",
    "Налоговые услуги",
    "Социальные услуги",
    "Регистрационные услуги",
    "Жилищно-коммунальные услуги",
];

/// (name, category, execution term, cost in rubles)
const SERVICES: &[(&str, &str, &str, i64)] = &[
    ("Замена паспорта в 20 лет", "Паспортные услуги", "10 дней", 300),
    ("Замена паспорта в 45 лет", "Паспортные услуги", "10 дней", 300),
    ("Выдача загранпаспорта", "Паспортные услуги", "1 месяц", 2000),
    ("Регистрация брака", "Регистрационные услуги", "1 день", 350),
    ("Регистрация рождения", "Регистрационные услуги", "1 день", 0),
    ("Постановка на налоговый учет", "Налоговые услуги", "5 дней", 0),
    ("Получение ИНН", "Налоговые услуги", "5 дней", 0),
    ("Оформление пенсии", "Социальные услуги", "30 дней", 0),
    ("Оформление детского пособия", "Социальные услуги", "14 дней", 0),
    ("Оформление субсидии ЖКХ", "Жилищно-коммунальные услуги", "21 день", 0),
];

/// (name, address, phone, schedule)
const OFFICES: &[(&str, &str, &str, &str)] = &[
    ("МФЦ на Ленина", "ул. Ленина, д. 1", "+74951234567", "пн-пт 9:00-18:00"),
    ("МФЦ на Мира", "ул. Мира, д. 15", "+74957654321", "пн-пт 8:00-20:00, сб 10:00-15:00"),
    ("МФЦ Центральный", "пл. Центральная, д. 5", "+74951122334", "пн-чт 9:00-17:00, пт 9:00-16:00"),
    ("МФЦ Западный", "ул. Западная, д. 25", "+74953344556", "пн-пт 9:00-19:00"),
    ("МФЦ Восточный", "пр. Восточный, д. 10", "+74954455667", "пн-пт 8:00-20:00, сб 9:00-14:00"),
];

const EMPLOYEES: &[(&str, &str)] = &[
    ("Иванов Иван Иванович", "specialist"),
    ("Петров Петр Петрович", "manager"),
    ("Сидорова Мария Сергеевна", "consultant"),
    ("Кузнецов Алексей Владимирович", "operator"),
    ("Смирнова Ольга Дмитриевна", "specialist"),
    ("Васильев Дмитрий Николаевич", "consultant"),
    ("Николаева Екатерина Андреевна", "specialist"),
    ("Федоров Сергей Иванович", "operator"),
    ("Александрова Анна Павловна", "manager"),
    ("Дмитриев Максим Олегович", "specialist"),
];

/// (username, email, snils)
const USERS: &[(&str, &str, &str)] = &[
    ("user1", "user1@example.com", "123-456-789 01"),
    ("user2", "user2@example.com", "123-456-789 02"),
    ("user3", "user3@example.com", "123-456-789 03"),
    ("user4", "user4@example.com", "123-456-789 04"),
    ("user5", "user5@example.com", "123-456-789 05"),
];

const NEWS_TITLES: &[&str] = &[
    "Открытие нового офиса МФЦ",
    "Введение новых услуг",
    "Изменение графика работы",
    "Проведение дня открытых дверей",
    "Внедрение электронной очереди",
    "Новые меры поддержки семей",
    "Упрощение процедуры регистрации",
    "Расширение перечня услуг",
    "Обновление оборудования",
    "Повышение качества обслуживания",
];

/// Username of the staff account created by the seed.
pub const STAFF_USERNAME: &str = "admin";

/// Counts of rows inserted by one seed run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: u32,
    pub services: u32,
    pub offices: u32,
    pub employees: u32,
    pub office_services: u32,
    pub users: u32,
    pub applications: u32,
    pub appointments: u32,
    pub news: u32,
}

/// Populate the database with demo data.
///
/// `password_hash` is used for every demo account, including the staff one.
pub async fn seed_demo_data<R: Rng + Send>(
    pool: &PgPool,
    rng: &mut R,
    password_hash: &str,
) -> Result<SeedReport, sqlx::Error> {
    let mut report = SeedReport::default();

    // Categories.
    let mut category_ids = Vec::with_capacity(CATEGORIES.len());
    for name in CATEGORIES {
        let id = match find_id(pool, "service_categories", "name", name).await? {
            Some(id) => id,
            None => {
                report.categories += 1;
                let input = CreateCategory {
                    name: (*name).to_string(),
                    description: Some(format!("Описание категории {name}")),
                };
                CategoryRepo::create(pool, &input).await?.id
            }
        };
        category_ids.push((*name, id));
    }

    // Services.
    let mut service_ids = Vec::with_capacity(SERVICES.len());
    for (name, category, term, cost) in SERVICES {
        let id = match find_id(pool, "services", "name", name).await? {
            Some(id) => id,
            None => {
                let Some(&(_, category_id)) = category_ids.iter().find(|(c, _)| c == category)
                else {
                    continue;
                };
                report.services += 1;
                let input = CreateService {
                    category_id,
                    name: (*name).to_string(),
                    description: Some(format!("Описание услуги {name}")),
                    execution_term: (*term).to_string(),
                    cost: Some(Decimal::from(*cost)),
                };
                ServiceRepo::create(pool, &input).await?.id
            }
        };
        service_ids.push(id);
    }

    // Offices.
    let mut office_ids = Vec::with_capacity(OFFICES.len());
    for (name, address, phone, schedule) in OFFICES {
        let id = match find_id(pool, "offices", "name", name).await? {
            Some(id) => id,
            None => {
                report.offices += 1;
                let input = CreateOffice {
                    name: (*name).to_string(),
                    address: (*address).to_string(),
                    phone: (*phone).to_string(),
                    work_schedule: (*schedule).to_string(),
                };
                OfficeRepo::create(pool, &input).await?.id
            }
        };
        office_ids.push(id);
    }

    // Employees, each at a random office.
    let mut employee_ids = Vec::with_capacity(EMPLOYEES.len());
    for (full_name, position) in EMPLOYEES {
        let id = match find_id(pool, "employees", "full_name", full_name).await? {
            Some(id) => id,
            None => {
                let Some(&office_id) = office_ids.choose(rng) else {
                    break;
                };
                report.employees += 1;
                let input = CreateEmployee {
                    office_id,
                    full_name: (*full_name).to_string(),
                    position: (*position).to_string(),
                };
                EmployeeRepo::create(pool, &input).await?.id
            }
        };
        employee_ids.push(id);
    }

    // Each office offers a random subset of at least three services.
    for &office_id in &office_ids {
        if service_ids.is_empty() {
            break;
        }
        let count = rng.random_range(3usize.min(service_ids.len())..=service_ids.len());
        let picked: Vec<DbId> = service_ids.choose_multiple(rng, count).copied().collect();
        for service_id in picked {
            let inserted = sqlx::query(
                "INSERT INTO office_services (office_id, service_id) VALUES ($1, $2)
                 ON CONFLICT ON CONSTRAINT uq_office_services_office_service DO NOTHING",
            )
            .bind(office_id)
            .bind(service_id)
            .execute(pool)
            .await?
            .rows_affected();
            report.office_services += inserted as u32;
        }
    }

    // Citizens with profiles.
    let mut user_ids = Vec::with_capacity(USERS.len());
    for (username, email, snils) in USERS {
        let id = match UserRepo::find_by_username(pool, username).await? {
            Some(user) => user.id,
            None => {
                report.users += 1;
                let input = CreateUser {
                    username: (*username).to_string(),
                    email: (*email).to_string(),
                    password_hash: password_hash.to_string(),
                    first_name: capitalize(username),
                    last_name: "Фамилия".to_string(),
                    is_staff: false,
                };
                let phone = format!("+7999{}", rng.random_range(1_000_000..=9_999_999));
                UserRepo::create_with_profile(pool, &input, &phone, snils)
                    .await?
                    .0
                    .id
            }
        };
        user_ids.push(id);
    }

    if UserRepo::find_by_username(pool, STAFF_USERNAME).await?.is_none() {
        report.users += 1;
        let input = CreateUser {
            username: STAFF_USERNAME.to_string(),
            email: "admin@example.com".to_string(),
            password_hash: password_hash.to_string(),
            first_name: "Администратор".to_string(),
            last_name: "МФЦ".to_string(),
            is_staff: true,
        };
        UserRepo::create(pool, &input).await?;
    }

    // Applications: 1-5 per user with a random seeded status and age.
    let statuses = [
        ApplicationState::Submitted,
        ApplicationState::InProgress,
        ApplicationState::Completed,
        ApplicationState::Rejected,
    ];
    for &user_id in &user_ids {
        for _ in 0..rng.random_range(1..=5) {
            let (Some(&service_id), Some(status)) = (service_ids.choose(rng), statuses.choose(rng))
            else {
                break;
            };
            let created_at = Utc::now() - Duration::days(rng.random_range(1..=30));
            let inserted = sqlx::query(
                "INSERT INTO applications (user_id, service_id, status_id, application_data, created_at)
                 SELECT $1, $2, $3, $4, $5
                 WHERE NOT EXISTS (
                     SELECT 1 FROM applications
                     WHERE user_id = $1 AND service_id = $2 AND status_id = $3
                 )",
            )
            .bind(user_id)
            .bind(service_id)
            .bind(status.id())
            .bind("Прошу оказать услугу. Документы приложены.")
            .bind(created_at)
            .execute(pool)
            .await?
            .rows_affected();
            report.applications += inserted as u32;
        }
    }

    // Appointments: 1-3 attempts per user, kept only where the office offers
    // the chosen service.
    for &user_id in &user_ids {
        for _ in 0..rng.random_range(1..=3) {
            let (Some(&office_id), Some(&service_id)) =
                (office_ids.choose(rng), service_ids.choose(rng))
            else {
                break;
            };
            if !OfficeServiceRepo::exists(pool, office_id, service_id).await? {
                continue;
            }
            let at = Utc::now() + Duration::days(rng.random_range(1..=30));
            let status = VALID_APPOINTMENT_STATUSES
                .choose(rng)
                .copied()
                .unwrap_or(mfc_core::status::APPOINTMENT_ACTIVE);
            sqlx::query(
                "INSERT INTO appointments (user_id, office_id, service_id, appointment_datetime, status)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(user_id)
            .bind(office_id)
            .bind(service_id)
            .bind(at)
            .bind(status)
            .execute(pool)
            .await?;
            report.appointments += 1;
        }
    }

    // News, each by a random employee.
    for title in NEWS_TITLES {
        if find_id(pool, "news", "title", title).await?.is_some() {
            continue;
        }
        let Some(&author_id) = employee_ids.choose(rng) else {
            break;
        };
        report.news += 1;
        let input = CreateNews {
            title: (*title).to_string(),
            content: format!("Содержание новости: {title}. Подробности будут позже."),
            published_at: Some(Utc::now() - Duration::days(rng.random_range(1..=100))),
            author_id,
        };
        NewsRepo::create(pool, &input).await?;
    }

    tracing::info!(?report, "Demo data seeded");
    Ok(report)
}

/// Look up a row id by a unique-ish text column. `table` and `column` are
/// compile-time constants, never user input.
async fn find_id(
    pool: &PgPool,
    table: &str,
    column: &str,
    value: &str,
) -> Result<Option<DbId>, sqlx::Error> {
    let query = format!("SELECT id FROM {table} WHERE {column} = $1 ORDER BY id LIMIT 1");
    sqlx::query_scalar::<_, DbId>(&query)
        .bind(value)
        .fetch_optional(pool)
        .await
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_handles_ascii_and_empty() {
        assert_eq!(capitalize("user1"), "User1");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn every_service_names_a_known_category() {
        for (_, category, _, _) in SERVICES {
            assert!(CATEGORIES.contains(category), "{category}");
        }
    }

    #[test]
    fn demo_snils_are_normalized() {
        for (_, _, snils) in USERS {
            assert_eq!(mfc_core::snils::normalize_snils(snils).unwrap(), *snils);
        }
    }

    #[test]
    fn demo_positions_are_valid() {
        for (_, position) in EMPLOYEES {
            assert!(mfc_core::employee::validate_position(position).is_ok());
        }
    }
}
