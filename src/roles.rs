//! Role capabilities
//!
//! Callers drive development and deployment through the [`Develop`] and
//! [`Deploy`] traits without knowing which concrete role does the work. Any
//! type with both capabilities is a [`Specialist`].

/// Ability to develop a system
pub trait Develop {
    fn develop(&self, system: &str) -> String;
}

/// Ability to deploy a system to an environment
pub trait Deploy {
    fn deploy(&self, system: &str, environment: &str) -> String;
}

/// A role that can both develop and deploy
pub trait Specialist: Develop + Deploy {}

impl<T: Develop + Deploy> Specialist for T {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Developer {
    pub name: String,
}

impl Developer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Develop for Developer {
    fn develop(&self, system: &str) -> String {
        format!("{} is developing {}", self.name, system)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployer {
    pub name: String,
}

impl Deployer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Deploy for Deployer {
    fn deploy(&self, system: &str, environment: &str) -> String {
        format!("{} is deploying {} to {}", self.name, system, environment)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialistEngineer {
    pub name: String,
}

impl SpecialistEngineer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Develop for SpecialistEngineer {
    fn develop(&self, system: &str) -> String {
        format!("{} is developing {}", self.name, system)
    }
}

impl Deploy for SpecialistEngineer {
    fn deploy(&self, system: &str, environment: &str) -> String {
        format!("{} is deploying {} to {}", self.name, system, environment)
    }
}

/// Develop `system` and deploy it to every environment in order
///
/// Returns the narrated lines, framed by start and completion markers.
pub fn run_release(system: &str, environments: &[&str], specialist: &dyn Specialist) -> Vec<String> {
    narrate(
        system,
        specialist.develop(system),
        environments
            .iter()
            .map(|environment| specialist.deploy(system, environment)),
    )
}

/// Release with separate roles: one developer, and a deployer per environment
pub fn run_release_with(
    system: &str,
    developer: &dyn Develop,
    deployments: &[(&str, &dyn Deploy)],
) -> Vec<String> {
    narrate(
        system,
        developer.develop(system),
        deployments
            .iter()
            .map(|(environment, deployer)| deployer.deploy(system, environment)),
    )
}

fn narrate(
    system: &str,
    developed: String,
    deployed: impl Iterator<Item = String>,
) -> Vec<String> {
    let mut lines = vec![format!("---Starting System {}", system), developed];
    lines.extend(deployed);
    lines.push(format!("---Completed System {}", system));
    lines
}

/// Something that can introduce itself
pub trait Speaker {
    fn speak(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Speaker for Person {
    fn speak(&self) -> String {
        format!("I'm {}", self.name)
    }
}

/// Narrate what a speaker says
pub fn say_something(speaker: &dyn Speaker) -> String {
    format!("Speaking -> {}", speaker.speak())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_developer_and_deployer_narration() {
        assert_eq!(Developer::new("Mary").develop("saturn"), "Mary is developing saturn");
        assert_eq!(
            Deployer::new("Tina").deploy("saturn", "prod"),
            "Tina is deploying saturn to prod"
        );
    }

    #[test]
    fn test_run_release_with_specialist() {
        let specialist = SpecialistEngineer::new("Alicia");
        let lines = run_release("mars", &["dev", "staging", "prod"], &specialist);

        assert_eq!(
            lines,
            vec![
                "---Starting System mars",
                "Alicia is developing mars",
                "Alicia is deploying mars to dev",
                "Alicia is deploying mars to staging",
                "Alicia is deploying mars to prod",
                "---Completed System mars",
            ]
        );
    }

    #[test]
    fn test_run_release_with_separate_roles() {
        let developer = Developer::new("Mary");
        let (tina, adam) = (Deployer::new("Tina"), Deployer::new("Adam"));
        let specialist = SpecialistEngineer::new("Steve");

        let deployments: [(&str, &dyn Deploy); 3] =
            [("dev", &tina), ("staging", &adam), ("prod", &specialist)];
        let lines = run_release_with("saturn", &developer, &deployments);

        assert_eq!(
            lines,
            vec![
                "---Starting System saturn",
                "Mary is developing saturn",
                "Tina is deploying saturn to dev",
                "Adam is deploying saturn to staging",
                "Steve is deploying saturn to prod",
                "---Completed System saturn",
            ]
        );
    }

    #[test]
    fn test_run_release_without_environments() {
        let lines = run_release("venus", &[], &SpecialistEngineer::new("Steve"));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Steve is developing venus");
    }

    #[test]
    fn test_any_develop_deploy_type_is_specialist() {
        struct Pair(Developer, Deployer);
        impl Develop for Pair {
            fn develop(&self, system: &str) -> String {
                self.0.develop(system)
            }
        }
        impl Deploy for Pair {
            fn deploy(&self, system: &str, environment: &str) -> String {
                self.1.deploy(system, environment)
            }
        }

        let pair = Pair(Developer::new("John"), Deployer::new("Emma"));
        let lines = run_release("pluto", &["dev"], &pair);
        assert_eq!(lines[1], "John is developing pluto");
        assert_eq!(lines[2], "Emma is deploying pluto to dev");
    }

    #[rstest]
    #[case("Bob", "Speaking -> I'm Bob")]
    #[case("", "Speaking -> I'm ")]
    fn test_say_something(#[case] name: &str, #[case] expected: &str) {
        let person = Person::new(name);
        assert_eq!(say_something(&person), expected);
    }
}
