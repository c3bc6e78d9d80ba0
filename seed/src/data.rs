//! Fixed rosters and generators for the demo dataset.
//!
//! Everything derives from constant tables and the record index. No RNG, no
//! clock reads: two runs produce identical documents, so a reseed never
//! shifts what the dashboard shows.

use chrono::{Days, NaiveDate};
use regex::Regex;
use serde::Serialize;

/// Every hash the seeder writes, singletons included.
pub const COLLECTIONS: [&str; 12] = [
    "participants",
    "teams",
    "projects",
    "mentors",
    "judges",
    "tracks",
    "timeline",
    "public_activities",
    "faq",
    "admin_users",
    "public_stats",
    "hackathon",
];

const TRACKS: [&str; 4] = ["Generative AI", "Agentic AI", "Web3", "Cybersecurity"];

const EXPERIENCES: [&str; 3] = ["Beginner", "Intermediate", "Advanced"];

const UNIVERSITIES: [&str; 6] = [
    "IIT Kharagpur",
    "Jadavpur University",
    "NIT Durgapur",
    "Calcutta University",
    "IIT Bombay",
    "IIT Delhi",
];

const PARTICIPANT_NAMES: [&str; 48] = [
    "Arjun Sharma",
    "Priya Patel",
    "Rohit Kumar",
    "Sneha Das",
    "Karthik Menon",
    "Ananya Ghosh",
    "Vikram Rao",
    "Meera Joshi",
    "Rahul Singh",
    "Pooja Reddy",
    "Amit Gupta",
    "Kavya Iyer",
    "Sanjay Nair",
    "Divya Sharma",
    "Ravi Krishnan",
    "Neha Agarwal",
    "Aditya Kumar",
    "Shreya Patel",
    "Manish Yadav",
    "Ritika Singh",
    "Harsh Varma",
    "Sakshi Jain",
    "Deepak Rao",
    "Isha Gupta",
    "Nikhil Sharma",
    "Tanya Malhotra",
    "Varun Khanna",
    "Priyanka Das",
    "Kunal Agarwal",
    "Ankita Verma",
    "Rohan Mehta",
    "Simran Kaur",
    "Abhishek Singh",
    "Pallavi Reddy",
    "Gaurav Kumar",
    "Swati Nair",
    "Ajay Patel",
    "Nidhi Sharma",
    "Vishal Gupta",
    "Rashmi Iyer",
    "Suresh Kumar",
    "Lakshmi Devi",
    "Manoj Singh",
    "Sunita Rao",
    "Rajesh Verma",
    "Kiran Patel",
    "Vinod Kumar",
    "Geeta Sharma",
];

const SKILL_SETS: [[&str; 3]; 15] = [
    ["Python", "TensorFlow", "React"],
    ["JavaScript", "Node.js", "MongoDB"],
    ["Java", "Spring Boot", "AWS"],
    ["Python", "Flask", "PostgreSQL"],
    ["React", "TypeScript", "GraphQL"],
    ["Solidity", "Web3.js", "Ethereum"],
    ["C++", "OpenCV", "PyTorch"],
    ["Vue.js", "Nuxt.js", "Firebase"],
    ["Go", "Docker", "Kubernetes"],
    ["Swift", "iOS", "Core ML"],
    ["Kotlin", "Android", "Room"],
    ["PHP", "Laravel", "MySQL"],
    ["Ruby", "Rails", "Redis"],
    ["Rust", "WebAssembly", "Actix"],
    ["C#", ".NET", "Azure"],
];

const TEAM_NAMES: [&str; 46] = [
    "AI Innovators",
    "BlockChain Builders",
    "Cyber Guardians",
    "Tech Titans",
    "Code Crusaders",
    "Data Dragons",
    "Neural Networks",
    "Quantum Coders",
    "Smart Contracts",
    "Security Squad",
    "ML Masters",
    "Web Warriors",
    "Crypto Kings",
    "AI Architects",
    "Bug Hunters",
    "Cloud Ninjas",
    "Algorithm Aces",
    "Hack Heroes",
    "Binary Beasts",
    "Digital Dynamos",
    "Code Crafters",
    "Tech Transformers",
    "Innovation Inc",
    "Pixel Pirates",
    "Byte Bandits",
    "Logic Lords",
    "System Saviors",
    "Data Detectives",
    "Security Sentinels",
    "AI Avengers",
    "Blockchain Battalion",
    "Cyber Champions",
    "Tech Trailblazers",
    "Code Commandos",
    "Digital Disciples",
    "Algorithm Army",
    "Innovation Squad",
    "Pixel Pioneers",
    "Byte Builders",
    "Logic Legends",
    "System Stars",
    "Data Dynamos",
    "Security Specialists",
    "AI Alliance",
    "Blockchain Brotherhood",
    "Cyber Collective",
];

const PROJECT_NAMES: [&str; 47] = [
    "CodeGenius - AI-Powered Code Generator",
    "EcoChain - Sustainable Supply Chain",
    "SecureNet - Network Vulnerability Scanner",
    "MindMeld - AI Collaboration Platform",
    "CryptoGuard - Decentralized Identity",
    "ThreatHunter - ML Security Analysis",
    "SmartContract Auditor",
    "AI-Powered Chatbot Framework",
    "Blockchain Voting System",
    "Cybersecurity Dashboard",
    "Automated Code Review Tool",
    "Decentralized File Storage",
    "AI Image Recognition System",
    "Smart Home Security",
    "Predictive Analytics Platform",
    "NFT Marketplace",
    "AI Music Composer",
    "Blockchain Supply Tracker",
    "Vulnerability Assessment Tool",
    "Machine Learning Model Optimizer",
    "Crypto Trading Bot",
    "AI Health Diagnostics",
    "Smart City Management",
    "Decentralized Social Network",
    "AI-Powered Recruitment",
    "Blockchain Insurance",
    "Cyber Threat Intelligence",
    "Automated Testing Framework",
    "AI Language Translator",
    "Smart Contract Platform",
    "Security Incident Response",
    "ML Data Pipeline",
    "Crypto Wallet Security",
    "AI-Powered Education",
    "Blockchain Healthcare",
    "Cybersecurity Training",
    "Automated Deployment Tool",
    "AI-Powered Analytics",
    "Decentralized Messaging",
    "Smart Contract Debugger",
    "Security Monitoring System",
    "ML Model Registry",
    "Crypto Payment Gateway",
    "AI-Powered CRM",
    "Blockchain Identity",
    "Cybersecurity Framework",
    "Automated Code Generation",
];

const PROJECT_DESCRIPTIONS: [&str; 23] = [
    "An intelligent code generation platform using GPT models to assist developers",
    "Blockchain-based supply chain tracking for sustainable products",
    "Advanced network vulnerability scanner with machine learning capabilities",
    "AI-powered collaboration platform for remote teams",
    "Decentralized identity management system using blockchain technology",
    "Machine learning-based security threat analysis and prevention",
    "Automated smart contract auditing tool with vulnerability detection",
    "Advanced chatbot framework with natural language understanding",
    "Secure and transparent blockchain-based voting system",
    "Comprehensive cybersecurity monitoring and response dashboard",
    "AI-powered automated code review and quality assessment tool",
    "Decentralized file storage system with encryption and redundancy",
    "Real-time image recognition and classification system",
    "IoT-based smart home security and automation platform",
    "Advanced predictive analytics platform for business intelligence",
    "User-friendly NFT marketplace with creator tools",
    "AI-powered music composition and generation system",
    "End-to-end blockchain supply chain tracking solution",
    "Comprehensive vulnerability assessment and penetration testing tool",
    "Machine learning model optimization and performance tuning platform",
    "Automated cryptocurrency trading bot with risk management",
    "AI-powered medical diagnosis and health monitoring system",
    "Smart city management platform with IoT integration",
];

const TRACK_DESCRIPTIONS: [&str; 4] = [
    "Build products on top of large generative models",
    "Autonomous agents that plan, act and collaborate",
    "Decentralized applications and on-chain infrastructure",
    "Defensive tooling, threat detection and secure systems",
];

/// Teams below this index are submitted and carry a project record.
const SUBMITTED_TEAMS: usize = 23;

/// Registrations opened a week before the event.
const REGISTRATION_OPENS: (i32, u32, u32) = (2025, 11, 1);

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub skills: Vec<String>,
    pub track: String,
    pub team_id: Option<u32>,
    pub experience: String,
    pub university: String,
    pub registration_date: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub track: String,
    pub members: Vec<String>,
    pub project_name: String,
    pub submission_status: String,
    pub progress: u32,
    pub github_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub team_name: String,
    pub project_name: String,
    pub track: String,
    pub description: String,
    pub submission_date: String,
    pub github_url: String,
    pub demo_url: String,
    pub judge_scores: JudgeScores,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JudgeScores {
    pub innovation: u32,
    pub technical: u32,
    pub impact: u32,
    pub presentation: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mentor {
    pub id: u32,
    pub name: String,
    pub expertise: Vec<String>,
    pub company: String,
    pub availability: String,
    pub teams_assigned: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Judge {
    pub id: u32,
    pub name: String,
    pub expertise: Vec<String>,
    pub organization: String,
    pub tracks_assigned: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub teams: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: u32,
    pub date: String,
    pub event: String,
    pub time: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: u32,
    pub r#type: String,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntry {
    pub id: u32,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: u32,
    pub username: String,
    pub password: String,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicStats {
    pub total_participants: u32,
    pub teams_formed: u32,
    pub projects_submitted: u32,
    pub days_until_event: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HackathonInfo {
    pub name: String,
    pub theme: String,
    pub start_date: String,
    pub end_date: String,
    pub venue: String,
    pub status: String,
}

pub fn generate_participants() -> Vec<Participant> {
    PARTICIPANT_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| Participant {
            id: index as u32 + 1,
            name: name.to_string(),
            email: format!("{}@email.com", name.to_lowercase().replace(' ', ".")),
            skills: owned(&SKILL_SETS[index % SKILL_SETS.len()]),
            track: TRACKS[index % TRACKS.len()].to_string(),
            team_id: (index < 46).then(|| index as u32 / 3 + 1),
            experience: EXPERIENCES[index % EXPERIENCES.len()].to_string(),
            university: UNIVERSITIES[index % UNIVERSITIES.len()].to_string(),
            registration_date: registration_date(index),
            status: participant_status(index).to_string(),
        })
        .collect()
}

pub fn generate_teams() -> Vec<Team> {
    let participants = generate_participants();

    TEAM_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| Team {
            id: index as u32 + 1,
            name: name.to_string(),
            track: TRACKS[index % TRACKS.len()].to_string(),
            members: participants
                .iter()
                .skip(index * 3)
                .take(3)
                .map(|participant| participant.name.clone())
                .collect(),
            project_name: PROJECT_NAMES[index].to_string(),
            submission_status: submission_status(index).to_string(),
            progress: if index < SUBMITTED_TEAMS {
                100
            } else {
                20 + (index as u32 * 3) % 80
            },
            github_url: format!("github.com/team{}/{}", index + 1, slug(PROJECT_NAMES[index])),
        })
        .collect()
}

pub fn generate_projects() -> Vec<Project> {
    generate_teams()
        .into_iter()
        .take(SUBMITTED_TEAMS)
        .enumerate()
        .map(|(index, team)| Project {
            id: index as u32 + 1,
            description: PROJECT_DESCRIPTIONS[index].to_string(),
            submission_date: format!("2025-11-08 {}:{:02}", 14 + index % 4, (index * 7) % 60),
            demo_url: format!("demo.{}.com", slug(&team.project_name)),
            judge_scores: JudgeScores {
                innovation: 7 + (index as u32 % 3),
                technical: 7 + ((index as u32 + 1) % 3),
                impact: 7 + ((index as u32 + 2) % 3),
                presentation: 7 + ((index as u32 + 3) % 3),
            },
            team_name: team.name,
            project_name: team.project_name,
            track: team.track,
            github_url: team.github_url,
        })
        .collect()
}

pub fn mentors() -> Vec<Mentor> {
    let roster: [(&str, [&str; 2], &str, &str, u32); 12] = [
        ("Dr. Amit Verma", ["AI/ML", "Deep Learning"], "Google", "Available", 3),
        ("Sarah Johnson", ["Blockchain", "Smart Contracts"], "Ethereum Foundation", "Busy", 2),
        ("Rajesh Gupta", ["Cybersecurity", "Penetration Testing"], "Cisco", "Available", 4),
        ("Dr. Priya Singh", ["Machine Learning", "NLP"], "Microsoft", "Available", 2),
        ("Alex Chen", ["Web3", "DeFi"], "Coinbase", "Available", 1),
        ("Maria Rodriguez", ["Cloud Security", "DevSecOps"], "Amazon", "Busy", 3),
        ("Dr. John Smith", ["AI Ethics", "Responsible AI"], "OpenAI", "Available", 2),
        ("Lisa Wong", ["Frontend", "UX Design"], "Meta", "Available", 1),
        ("David Kumar", ["Backend", "Microservices"], "Netflix", "Available", 2),
        ("Anna Petrov", ["Data Science", "Analytics"], "Spotify", "Available", 1),
        ("Michael Brown", ["IoT Security", "Hardware"], "Intel", "Busy", 2),
        ("Sophie Turner", ["Mobile Development", "Cross-platform"], "Uber", "Available", 1),
    ];

    roster
        .into_iter()
        .enumerate()
        .map(
            |(index, (name, expertise, company, availability, teams_assigned))| Mentor {
                id: index as u32 + 1,
                name: name.to_string(),
                expertise: owned(&expertise),
                company: company.to_string(),
                availability: availability.to_string(),
                teams_assigned,
            },
        )
        .collect()
}

pub fn judges() -> Vec<Judge> {
    vec![
        Judge {
            id: 1,
            name: "Prof. Indira Nath".to_string(),
            expertise: vec!["AI Research".to_string()],
            organization: "IIT Bombay".to_string(),
            tracks_assigned: vec!["Generative AI".to_string(), "Agentic AI".to_string()],
        },
        Judge {
            id: 2,
            name: "Vikash Agarwal".to_string(),
            expertise: vec!["Blockchain Technology".to_string()],
            organization: "ConsenSys".to_string(),
            tracks_assigned: vec!["Web3".to_string()],
        },
        Judge {
            id: 3,
            name: "Ravi Krishnan".to_string(),
            expertise: vec!["Information Security".to_string()],
            organization: "Infosys".to_string(),
            tracks_assigned: vec!["Cybersecurity".to_string()],
        },
    ]
}

pub fn tracks() -> Vec<Track> {
    let teams = generate_teams();

    TRACKS
        .iter()
        .enumerate()
        .map(|(index, name)| Track {
            id: index as u32 + 1,
            name: name.to_string(),
            description: TRACK_DESCRIPTIONS[index].to_string(),
            teams: teams.iter().filter(|team| team.track == *name).count() as u32,
        })
        .collect()
}

pub fn timeline() -> Vec<TimelineEvent> {
    let events: [(&str, &str, &str, &str); 6] = [
        ("2025-11-01", "Registration Opens", "09:00", "completed"),
        ("2025-11-06", "Team Formation Deadline", "23:59", "completed"),
        ("2025-11-07", "Opening Ceremony", "10:00", "completed"),
        ("2025-11-07", "Hacking Begins", "12:00", "active"),
        ("2025-11-08", "Submission Deadline", "18:00", "upcoming"),
        ("2025-11-09", "Judging & Awards", "11:00", "upcoming"),
    ];

    events
        .into_iter()
        .enumerate()
        .map(|(index, (date, event, time, status))| TimelineEvent {
            id: index as u32 + 1,
            date: date.to_string(),
            event: event.to_string(),
            time: time.to_string(),
            status: status.to_string(),
        })
        .collect()
}

pub fn public_activities() -> Vec<Activity> {
    let feed: [(&str, &str, &str); 5] = [
        ("registration", "48 participants registered across 4 tracks", "2025-11-06 18:00"),
        ("milestone", "All 46 teams formed and confirmed", "2025-11-07 09:30"),
        ("announcement", "Opening ceremony starts at 10:00 in the main hall", "2025-11-07 09:45"),
        ("update", "Mentor office hours are live on the second floor", "2025-11-07 14:00"),
        ("milestone", "First 10 projects submitted", "2025-11-08 15:20"),
    ];

    feed.into_iter()
        .enumerate()
        .map(|(index, (kind, message, timestamp))| Activity {
            id: index as u32 + 1,
            r#type: kind.to_string(),
            message: message.to_string(),
            timestamp: timestamp.to_string(),
        })
        .collect()
}

pub fn faq() -> Vec<FaqEntry> {
    let entries: [(&str, &str); 5] = [
        (
            "Who can participate?",
            "Any enrolled student. Teams of up to three, solo entries welcome.",
        ),
        (
            "Does my whole team need the same track?",
            "No. Teams pick one track for judging, members register individually.",
        ),
        (
            "What do we submit?",
            "A public repository link and a short demo before the Saturday 18:00 deadline.",
        ),
        (
            "How is judging scored?",
            "Innovation, technical depth, impact and presentation, each out of ten.",
        ),
        (
            "Is there mentor support during the event?",
            "Yes, mentors hold office hours both days. Check the timeline for slots.",
        ),
    ];

    entries
        .into_iter()
        .enumerate()
        .map(|(index, (question, answer))| FaqEntry {
            id: index as u32 + 1,
            question: question.to_string(),
            answer: answer.to_string(),
        })
        .collect()
}

pub fn admin_users() -> Vec<AdminUser> {
    // Demo credentials, same as every other seeded document.
    vec![AdminUser {
        id: 1,
        username: "admin".to_string(),
        password: "hackflow2025".to_string(),
        name: "Admin User".to_string(),
        role: "organizer".to_string(),
    }]
}

pub fn public_stats() -> PublicStats {
    PublicStats {
        total_participants: generate_participants().len() as u32,
        teams_formed: generate_teams().len() as u32,
        projects_submitted: generate_projects().len() as u32,
        days_until_event: 1,
    }
}

pub fn hackathon_info() -> HackathonInfo {
    HackathonInfo {
        name: "HackFlow 2025".to_string(),
        theme: "Intelligent & Trustless Systems".to_string(),
        start_date: "2025-11-07".to_string(),
        end_date: "2025-11-09".to_string(),
        venue: "IIT Kharagpur".to_string(),
        status: "Live".to_string(),
    }
}

/// Project-name slug for repository and demo URLs: the text before " - ",
/// lowercased, with spaces, hyphens and angle brackets removed.
pub fn slug(project_name: &str) -> String {
    let stem = project_name.split(" - ").next().unwrap_or(project_name);

    let strip = Regex::new(r"[\s<>-]").unwrap();
    strip.replace_all(stem, "").to_lowercase()
}

fn registration_date(index: usize) -> String {
    let (year, month, day) = REGISTRATION_OPENS;
    let opening = NaiveDate::from_ymd_opt(year, month, day).unwrap();

    (opening + Days::new(index as u64 % 8))
        .format("%Y-%m-%d")
        .to_string()
}

fn participant_status(index: usize) -> &'static str {
    if index % 4 == 3 { "Inactive" } else { "Active" }
}

fn submission_status(index: usize) -> &'static str {
    if index < SUBMITTED_TEAMS {
        "Submitted"
    } else if (index - SUBMITTED_TEAMS) % 2 == 0 {
        "In Progress"
    } else {
        "Planning"
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}
