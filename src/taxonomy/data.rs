//! Built-in skill taxonomy data

use super::{SkillCategory, TaxonomyEntry};
use SkillCategory::*;

fn entry(
    canonical: &str,
    category: SkillCategory,
    subcategory: &str,
    synonyms: &[&str],
    certifications: &[&str],
) -> TaxonomyEntry {
    TaxonomyEntry {
        canonical: canonical.to_string(),
        category,
        subcategory: if subcategory.is_empty() {
            None
        } else {
            Some(subcategory.to_string())
        },
        synonyms: synonyms.iter().map(|s| s.to_lowercase()).collect(),
        certifications: certifications.iter().map(|s| s.to_string()).collect(),
    }
}

/// The default taxonomy shipped with the engine.
///
/// Synonyms are stored lowercase; lookup normalizes case and whitespace so
/// surface variants like "React.JS" resolve without an entry per casing.
pub fn builtin_entries() -> Vec<TaxonomyEntry> {
    vec![
        // Programming languages
        entry("Python", ProgrammingLanguages, "interpreted", &["python3", "python 3", "py"], &["Python Institute PCAP"]),
        entry("JavaScript", ProgrammingLanguages, "interpreted", &["js", "ecmascript"], &[]),
        entry("TypeScript", ProgrammingLanguages, "web_languages", &["ts"], &[]),
        entry("Java", ProgrammingLanguages, "compiled", &["jdk", "java 8", "java 11", "java 17"], &["Oracle Certified Java Programmer"]),
        entry("C++", ProgrammingLanguages, "compiled", &["cpp", "c plus plus"], &[]),
        entry("C#", ProgrammingLanguages, "compiled", &["csharp", "c sharp", ".net"], &[]),
        entry("Go", ProgrammingLanguages, "compiled", &["golang"], &[]),
        entry("Rust", ProgrammingLanguages, "compiled", &[], &[]),
        entry("Ruby", ProgrammingLanguages, "interpreted", &[], &[]),
        entry("PHP", ProgrammingLanguages, "interpreted", &["php7", "php8"], &[]),
        entry("Swift", ProgrammingLanguages, "compiled", &[], &[]),
        entry("Kotlin", ProgrammingLanguages, "compiled", &[], &[]),
        entry("Scala", ProgrammingLanguages, "functional", &[], &[]),
        entry("R", ProgrammingLanguages, "interpreted", &["r language"], &[]),
        entry("Bash", ProgrammingLanguages, "scripting", &["shell scripting", "shell"], &[]),
        entry("HTML", ProgrammingLanguages, "web_languages", &["html5"], &[]),
        entry("CSS", ProgrammingLanguages, "web_languages", &["css3"], &[]),
        // Web technologies
        entry("React", WebTechnologies, "frontend_frameworks", &["reactjs", "react.js", "react js"], &[]),
        entry("Angular", WebTechnologies, "frontend_frameworks", &["angularjs", "angular2"], &[]),
        entry("Vue.js", WebTechnologies, "frontend_frameworks", &["vue", "vuejs"], &[]),
        entry("Svelte", WebTechnologies, "frontend_frameworks", &[], &[]),
        entry("Next.js", WebTechnologies, "frontend_frameworks", &["nextjs"], &[]),
        entry("Node.js", WebTechnologies, "backend_frameworks", &["node", "nodejs", "node js"], &[]),
        entry("Express.js", WebTechnologies, "backend_frameworks", &["express", "expressjs"], &[]),
        entry("Django", WebTechnologies, "backend_frameworks", &["django rest"], &[]),
        entry("Flask", WebTechnologies, "backend_frameworks", &[], &[]),
        entry("FastAPI", WebTechnologies, "backend_frameworks", &["fast api"], &[]),
        entry("Spring Boot", WebTechnologies, "backend_frameworks", &["spring", "spring framework"], &[]),
        entry("Ruby on Rails", WebTechnologies, "backend_frameworks", &["rails"], &[]),
        entry("GraphQL", WebTechnologies, "api", &[], &[]),
        entry("REST APIs", WebTechnologies, "api", &["rest", "rest api", "restful"], &[]),
        // Databases
        entry("PostgreSQL", Databases, "relational", &["postgres", "postgressql", "postgre"], &[]),
        entry("MySQL", Databases, "relational", &["my sql"], &[]),
        entry("SQL Server", Databases, "relational", &["mssql", "ms sql", "microsoft sql server"], &[]),
        entry("SQLite", Databases, "relational", &[], &[]),
        entry("Oracle Database", Databases, "relational", &["oracle db"], &[]),
        entry("MongoDB", Databases, "nosql", &["mongo", "mongo db"], &[]),
        entry("Redis", Databases, "nosql", &[], &[]),
        entry("Cassandra", Databases, "nosql", &[], &[]),
        entry("Elasticsearch", Databases, "nosql", &["elastic search"], &[]),
        entry("DynamoDB", Databases, "nosql", &["dynamo db"], &[]),
        entry("SQL", Databases, "relational", &["structured query language"], &[]),
        // Cloud platforms
        entry("AWS", CloudPlatforms, "aws", &["amazon web services", "amazon aws"],
              &["AWS Certified Solutions Architect", "AWS Certified Developer", "AWS Machine Learning Specialty"]),
        entry("Azure", CloudPlatforms, "azure", &["microsoft azure", "azure cloud"],
              &["Azure Administrator", "Azure Solutions Architect"]),
        entry("Google Cloud", CloudPlatforms, "gcp", &["gcp", "google cloud platform"],
              &["Google Cloud Architect", "Google Cloud Engineer"]),
        entry("Docker", CloudPlatforms, "containerization", &["docker containers"], &["Docker Certified Associate"]),
        entry("Kubernetes", CloudPlatforms, "containerization", &["k8s", "kube"],
              &["Certified Kubernetes Administrator", "Certified Kubernetes Application Developer"]),
        entry("Helm", CloudPlatforms, "containerization", &[], &[]),
        entry("Serverless", CloudPlatforms, "architecture", &["lambda", "cloud functions"], &[]),
        // Data science
        entry("Machine Learning", DataScience, "ml", &["ml"], &["AWS Machine Learning Specialty"]),
        entry("Deep Learning", DataScience, "ml", &["neural networks"], &[]),
        entry("TensorFlow", DataScience, "libraries", &[], &["TensorFlow Developer Certificate"]),
        entry("PyTorch", DataScience, "libraries", &[], &[]),
        entry("Scikit-learn", DataScience, "libraries", &["sklearn", "scikit learn"], &[]),
        entry("Pandas", DataScience, "libraries", &[], &[]),
        entry("NumPy", DataScience, "libraries", &["numpy arrays"], &[]),
        entry("Apache Spark", DataScience, "big_data", &["spark", "pyspark"], &[]),
        entry("Kafka", DataScience, "big_data", &["apache kafka"], &[]),
        entry("Airflow", DataScience, "big_data", &["apache airflow"], &[]),
        entry("Tableau", DataScience, "visualization", &[], &["Tableau Desktop Specialist"]),
        entry("Power BI", DataScience, "visualization", &["powerbi"], &[]),
        // DevOps
        entry("Git", DevOps, "version_control", &["git version control"], &[]),
        entry("Jenkins", DevOps, "ci_cd", &["jenkins ci"], &[]),
        entry("GitHub Actions", DevOps, "ci_cd", &["github workflows"], &[]),
        entry("GitLab CI", DevOps, "ci_cd", &["gitlab pipelines"], &[]),
        entry("CI/CD", DevOps, "ci_cd", &["cicd", "continuous integration"], &[]),
        entry("Terraform", DevOps, "infrastructure", &[], &["Terraform Associate"]),
        entry("Ansible", DevOps, "infrastructure", &[], &[]),
        entry("Prometheus", DevOps, "monitoring", &[], &[]),
        entry("Grafana", DevOps, "monitoring", &[], &[]),
        entry("Linux", DevOps, "infrastructure", &["unix", "gnu/linux"], &["Linux Foundation LFCS"]),
        entry("Microservices", DevOps, "architecture", &["micro services"], &[]),
        // Mobile
        entry("React Native", MobileDevelopment, "cross_platform", &[], &[]),
        entry("Flutter", MobileDevelopment, "cross_platform", &[], &[]),
        entry("Android", MobileDevelopment, "native_android", &["android sdk", "android development"], &[]),
        entry("iOS", MobileDevelopment, "native_ios", &["ios sdk", "ios development"], &[]),
        // Security
        entry("Penetration Testing", Security, "application", &["pentesting", "pen testing"], &["OSCP", "CEH"]),
        entry("Network Security", Security, "network", &["firewalls"], &["Security+", "CISSP"]),
        entry("OWASP", Security, "application", &["owasp top 10"], &[]),
        entry("IAM", Security, "cloud_security", &["identity and access management"], &[]),
        // Soft skills
        entry("Agile", SoftSkills, "collaboration", &["agile methodology", "agile development"], &[]),
        entry("Scrum", SoftSkills, "collaboration", &["scrum framework"], &["Certified Scrum Master"]),
        entry("Project Management", SoftSkills, "leadership", &["program management"], &["PMP", "PRINCE2"]),
        entry("Team Leadership", SoftSkills, "leadership", &["people management", "team lead"], &[]),
        entry("Communication", SoftSkills, "communication", &["written communication", "verbal communication"], &[]),
        entry("Technical Writing", SoftSkills, "communication", &["documentation"], &[]),
        entry("Mentoring", SoftSkills, "leadership", &["coaching"], &[]),
        entry("Problem Solving", SoftSkills, "problem_solving", &["analytical thinking", "troubleshooting"], &[]),
    ]
}
