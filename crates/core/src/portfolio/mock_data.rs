//! Static demo data.
//!
//! Used when no content repository is configured. Pure functions with no side
//! effects, so they double as fixtures in tests.

use std::collections::HashMap;

use super::types::{ProjectRecord, Skill, SkillCategory, Technology};

const DEVICON: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/icons";

/// A demo project record together with its inline detailed description.
#[derive(Debug, Clone)]
pub struct DemoProject {
    pub record: ProjectRecord,
    pub detailed_description: &'static str,
}

/// Returns the demo technology dictionary keyed by name.
pub fn demo_technologies() -> HashMap<String, Technology> {
    let devicon = |name: &str, icon: &str| Technology::new(name, format!("{DEVICON}/{icon}"));

    [
        devicon("Go", "go/go-original.svg"),
        devicon("Java", "java/java-original.svg"),
        devicon("Python", "python/python-original.svg"),
        devicon("JavaScript", "javascript/javascript-original.svg"),
        devicon("Spring Boot", "spring/spring-original.svg"),
        devicon("Gin", "go/go-original.svg"),
        devicon("FastAPI", "fastapi/fastapi-original.svg"),
        devicon("Django", "django/django-plain.svg"),
        devicon("Flask", "flask/flask-original.svg"),
        devicon("PostgreSQL", "postgresql/postgresql-original.svg"),
        devicon("MySQL", "mysql/mysql-original.svg"),
        devicon("MongoDB", "mongodb/mongodb-original.svg"),
        devicon("Redis", "redis/redis-original.svg"),
        devicon("Docker", "docker/docker-original.svg"),
        devicon("Kubernetes", "kubernetes/kubernetes-plain.svg"),
        devicon(
            "Google Cloud Platform",
            "googlecloud/googlecloud-original.svg",
        ),
        devicon("Nginx", "nginx/nginx-original.svg"),
        devicon("Terraform", "terraform/terraform-original.svg"),
        devicon("Linux", "linux/linux-original.svg"),
        devicon("Virtualization", "vagrant/vagrant-original.svg"),
        devicon("Apache Kafka", "apachekafka/apachekafka-original.svg"),
        devicon("gRPC", "grpc/grpc-original.svg"),
        devicon("Prometheus", "prometheus/prometheus-original.svg"),
        devicon("Grafana", "grafana/grafana-original.svg"),
        devicon("GitHub Actions", "github/github-original.svg"),
        devicon("Helm", "helm/helm-original.svg"),
        devicon("Microservices", "kubernetes/kubernetes-plain.svg"),
        devicon("OpenTelemetry", "opentelemetry/opentelemetry-original.svg"),
    ]
    .into_iter()
    .map(|tech| (tech.name.clone(), tech))
    .collect()
}

/// Returns the demo skill categories.
///
/// `icon_for` resolves a technology name to its icon URL; unknown names
/// should map to an empty string.
pub fn demo_skill_categories(icon_for: impl Fn(&str) -> String) -> Vec<SkillCategory> {
    // (category, [(display name, technology name)])
    let groups: [(&str, &[(&str, &str)]); 6] = [
        (
            "Languages",
            &[
                ("Go", "Go"),
                ("Python", "Python"),
                ("Java", "Java"),
                ("JavaScript", "JavaScript"),
            ],
        ),
        (
            "Frameworks",
            &[
                ("Gin", "Gin"),
                ("Django", "Django"),
                ("FastAPI", "FastAPI"),
                ("Flask", "Flask"),
                ("Spring Boot", "Spring Boot"),
            ],
        ),
        (
            "Infrastructure & DevOps",
            &[
                ("GCP", "Google Cloud Platform"),
                ("Kubernetes", "Kubernetes"),
                ("Docker", "Docker"),
                ("Terraform", "Terraform"),
                ("GitHub Actions", "GitHub Actions"),
                ("Helm", "Helm"),
            ],
        ),
        (
            "Databases & Messaging",
            &[
                ("Redis", "Redis"),
                ("MongoDB", "MongoDB"),
                ("MySQL", "MySQL"),
                ("PostgreSQL", "PostgreSQL"),
                ("Apache Kafka", "Apache Kafka"),
                ("gRPC", "gRPC"),
            ],
        ),
        (
            "Architecture & Patterns",
            &[
                ("Distributed Systems", "Distributed Systems"),
                ("Microservices", "Microservices"),
                ("Event Sourcing", "Event Sourcing"),
                ("CQRS", "CQRS"),
                ("Domain-Driven Design", "Domain-Driven Design"),
            ],
        ),
        (
            "Monitoring",
            &[
                ("Grafana", "Grafana"),
                ("Prometheus", "Prometheus"),
                ("OpenTelemetry", "OpenTelemetry"),
            ],
        ),
    ];

    groups
        .iter()
        .map(|(category, skills)| SkillCategory {
            category: category.to_string(),
            skills: skills
                .iter()
                .map(|(name, tech)| Skill {
                    name: name.to_string(),
                    icon_url: icon_for(tech),
                    category: category.to_string(),
                })
                .collect(),
        })
        .collect()
}

/// Returns the demo projects in display order.
pub fn demo_projects() -> Vec<DemoProject> {
    vec![
        DemoProject {
            record: demo_record(
                1,
                "Ascentio - Job Prospecting Platform",
                "A job prospecting platform built with Go, featuring a microservices \
                 architecture, event-driven design and real-time notifications.",
                "ascentio",
                Some("https://ascentio.demo.benidevo.com"),
                "Go",
                &["Go", "PostgreSQL", "Redis", "Docker"],
            ),
            detailed_description: "Ascentio automates job discovery, matches candidates with \
                suitable positions and streamlines applications while keeping them personal.\n\n\
                Services for user management, job aggregation, matching and notification \
                delivery communicate through events, so each one can scale and fail on its own.\n\n\
                PostgreSQL read replicas and a Redis cache keep matching responses under a \
                second across more than ten thousand listings a day.",
        },
        DemoProject {
            record: demo_record(
                2,
                "Distributed URL Shortener",
                "A distributed URL shortening system with geographic analytics, built \
                 with FastAPI and deployed on Kubernetes.",
                "url-shortener",
                Some("https://s.benidevo.com"),
                "Python",
                &[
                    "Python",
                    "FastAPI",
                    "Docker",
                    "Kubernetes",
                    "PostgreSQL",
                    "Redis",
                ],
            ),
            detailed_description: "A horizontally scalable URL shortener with privacy-aware \
                geographic analytics.\n\n\
                Short codes use base62 encoding with collision detection and retries. Lookups \
                go through a multi-tier cache with TTL invalidation in front of PostgreSQL.\n\n\
                The system serves more than a million redirects a day.",
        },
        DemoProject {
            record: demo_record(
                3,
                "Order Fulfillment System",
                "An order fulfillment system using event sourcing, CQRS and sagas to \
                 handle complex business workflows.",
                "order-fulfillment",
                None,
                "Java",
                &[
                    "Java",
                    "Spring Boot",
                    "Go",
                    "Apache Kafka",
                    "PostgreSQL",
                    "Docker",
                    "Kubernetes",
                    "Nginx",
                ],
            ),
            detailed_description: "Command services own writes and query services own reads, \
                with Apache Kafka carrying events between them and keeping a replayable audit \
                trail.\n\n\
                Choreography-based sagas with compensation steps keep distributed transactions \
                eventually consistent without a central coordinator.",
        },
        DemoProject {
            record: demo_record(
                4,
                "MiniCon",
                "A lightweight container runtime in Python demonstrating process \
                 isolation, resource management and networking.",
                "minicon",
                None,
                "Python",
                &["Python", "Linux", "Virtualization"],
            ),
            detailed_description: "MiniCon drives Linux namespaces, cgroups v2 and overlay \
                filesystems directly to show how containers work underneath.\n\n\
                It isolates PID, network and mount namespaces, layers images with overlayfs \
                and cleans up every resource it creates.",
        },
    ]
}

fn demo_record(
    id: u32,
    title: &str,
    description: &str,
    slug: &str,
    live_url: Option<&str>,
    language: &str,
    technologies: &[&str],
) -> ProjectRecord {
    ProjectRecord {
        id,
        title: title.to_string(),
        description: description.to_string(),
        github_url: format!("https://github.com/benidevo/{slug}"),
        live_url: live_url.map(str::to_string),
        language: language.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        featured: true,
        architecture_diagram_url: Some(format!("/static/images/diagrams/{slug}-architecture.svg")),
        architecture_diagram_file: None,
        detailed_description_file: None,
    }
}
