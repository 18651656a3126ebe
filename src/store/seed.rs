//! Canonical demo dataset loaded once at startup. Jobs and candidates are
//! built together so every candidate links to a real job id.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::models::candidate::{Candidate, Stage};
use crate::models::job::{Job, JobStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn posted(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("valid seed timestamp")
        .with_timezone(&Utc)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn demo_dataset() -> (Vec<Job>, Vec<Candidate>) {
    let frontend = Uuid::new_v4();
    let backend = Uuid::new_v4();
    let designer = Uuid::new_v4();
    let devops = Uuid::new_v4();
    let bizdev = Uuid::new_v4();

    let jobs = vec![
        Job {
            id: frontend,
            title: "Senior Frontend Engineer".to_string(),
            description: "We are looking for a seasoned frontend engineer to build beautiful and performant user interfaces using the latest web technologies.".to_string(),
            skills: strings(&["React", "TypeScript", "Next.js", "Tailwind CSS"]),
            salary: Some("Negotiable".to_string()),
            location: "Remote".to_string(),
            deadline: date(2024, 8, 30),
            status: JobStatus::Open,
            posted_date: posted("2024-07-15T09:00:00Z"),
        },
        Job {
            id: backend,
            title: "Backend Developer (Java)".to_string(),
            description: "Seeking a backend developer with experience in Java and Spring ecosystem to work on our core services and build scalable microservices.".to_string(),
            skills: strings(&["Java", "Spring Boot", "Microservices", "PostgreSQL"]),
            salary: Some("40,000,000 - 60,000,000 VND".to_string()),
            location: "Ho Chi Minh City".to_string(),
            deadline: date(2024, 9, 15),
            status: JobStatus::Open,
            posted_date: posted("2024-07-18T11:00:00Z"),
        },
        Job {
            id: designer,
            title: "UX/UI Designer".to_string(),
            description: "Creative UX/UI designer needed to shape our user experience, create intuitive workflows, and build a world-class design system.".to_string(),
            skills: strings(&["Figma", "Sketch", "User Research", "Prototyping"]),
            salary: Some("30,000,000 - 45,000,000 VND".to_string()),
            location: "Hanoi".to_string(),
            deadline: date(2024, 8, 10),
            status: JobStatus::Closed,
            posted_date: posted("2024-06-20T14:00:00Z"),
        },
        Job {
            id: devops,
            title: "DevOps Engineer".to_string(),
            description: "Manage our growing infrastructure and deployment pipelines on AWS to ensure reliability, scalability, and security.".to_string(),
            skills: strings(&["AWS", "Kubernetes", "CI/CD", "Terraform"]),
            salary: Some("50,000,000 - 70,000,000 VND".to_string()),
            location: "Remote".to_string(),
            deadline: date(2024, 8, 25),
            status: JobStatus::Pending,
            posted_date: posted("2024-07-20T16:00:00Z"),
        },
        Job {
            id: bizdev,
            title: "Business Development Manager".to_string(),
            description: "Drive business growth by identifying new opportunities, building client relationships, and leading our sales strategy in the software services sector.".to_string(),
            skills: strings(&["Sales", "Negotiation", "Business Strategy", "CRM"]),
            salary: Some("Negotiable".to_string()),
            location: "Da Nang".to_string(),
            deadline: date(2024, 9, 1),
            status: JobStatus::Open,
            posted_date: posted("2024-07-22T10:00:00Z"),
        },
    ];

    let seed_candidate = |seed: u32,
                          name: &str,
                          email: &str,
                          skills: &[&str],
                          experience: &str,
                          stage: Stage,
                          applied: NaiveDate,
                          job_id: Uuid| Candidate {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        avatar: format!("https://picsum.photos/seed/{}/40/40", seed),
        skills: strings(skills),
        experience: experience.to_string(),
        stage,
        applied_date: applied,
        job_id,
    };

    let candidates = vec![
        seed_candidate(1, "An Nguyen", "an.nguyen@example.com", &["React", "Node.js", "TypeScript"], "5 years of experience in full-stack development.", Stage::Applied, date(2024, 7, 20), frontend),
        seed_candidate(2, "Binh Tran", "binh.tran@example.com", &["Python", "Django", "PostgreSQL"], "3 years of experience as a backend developer.", Stage::Screening, date(2024, 7, 18), frontend),
        seed_candidate(3, "Chi Le", "chi.le@example.com", &["Vue.js", "Firebase", "UX/UI"], "4 years of experience in frontend development.", Stage::InterviewOne, date(2024, 7, 19), frontend),
        seed_candidate(4, "Dung Pham", "dung.pham@example.com", &["Java", "Spring Boot", "AWS"], "7 years of experience in enterprise software.", Stage::Applied, date(2024, 7, 21), backend),
        seed_candidate(5, "Em Hoang", "em.hoang@example.com", &["React Native", "GraphQL"], "2 years of mobile development.", Stage::Screening, date(2024, 7, 22), backend),
        seed_candidate(6, "Giang Vo", "giang.vo@example.com", &["Angular", "RxJS", "NgRx"], "6 years with enterprise Angular projects.", Stage::Offer, date(2024, 7, 15), designer),
        seed_candidate(7, "Hieu Dinh", "hieu.dinh@example.com", &["DevOps", "Kubernetes", "Terraform"], "8 years in cloud infrastructure and DevOps.", Stage::Onboarding, date(2024, 6, 30), devops),
        seed_candidate(8, "Khanh Mai", "khanh.mai@example.com", &["Product Management", "Agile", "JIRA"], "10 years leading product teams.", Stage::InterviewTwo, date(2024, 7, 10), frontend),
        seed_candidate(9, "Lien Nguyen", "lien.nguyen@example.com", &["Sales", "CRM", "Negotiation"], "5 years in B2B sales.", Stage::Applied, date(2024, 7, 25), bizdev),
        seed_candidate(10, "Minh Pham", "minh.pham@example.com", &["Marketing", "SEO", "Content Creation"], "3 years in digital marketing.", Stage::Screening, date(2024, 7, 26), bizdev),
    ];

    (jobs, candidates)
}
