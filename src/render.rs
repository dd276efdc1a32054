//! Markdown rendering - pure functions from an [`AnswerSet`] to README text.
//!
//! Rendering never fails and has no side effects. The only conditional
//! behavior is the license choice: when no license was picked, the license
//! renderers contribute nothing at all rather than a placeholder.

use crate::answers::AnswerSet;
use crate::license::License;

fn badge_image(license: License) -> String {
    format!(
        "![License: {}](https://img.shields.io/badge/license-{}-blue.svg)",
        license.name(),
        license.badge_slug()
    )
}

/// License name followed by its badge image, or an empty string when no
/// license was chosen.
pub fn license_badge(license: Option<License>) -> String {
    match license {
        Some(l) => format!("{} {}", l.name(), badge_image(l)),
        None => String::new(),
    }
}

/// Badge image followed by the license name - the variant used under the
/// title heading. Same emptiness contract as [`license_badge`].
pub fn license_link(license: Option<License>) -> String {
    match license {
        Some(l) => format!("{} {}", badge_image(l), l.name()),
        None => String::new(),
    }
}

/// The license name verbatim for the License section body, or an empty
/// string when no license was chosen.
pub fn license_section(license: Option<License>) -> String {
    match license {
        Some(l) => l.name().to_string(),
        None => String::new(),
    }
}

/// Compose the full README document. Deterministic: the same answers always
/// produce byte-identical output.
pub fn generate_readme(answers: &AnswerSet) -> String {
    format!(
        "\
# {title}

{badge}

## Description

{description}

## Table of Contents

- [Description](#description)
- [Installation](#installation)
- [Usage](#usage)
- [License](#license)
- [Credits](#contributing)
- [Tests](#tests)
- [Questions](#questions)

## Installation

{installation}

## Usage

{usage}

## License

{license}

## Contributing

{contributing}

## Tests

{tests}

## Questions

Find me on GitHub: [{username}](https://github.com/{username}).

You can reach me with additional questions at {email}.
",
        title = answers.title,
        badge = license_link(answers.license),
        description = answers.description,
        installation = answers.installation,
        usage = answers.usage,
        license = license_section(answers.license),
        contributing = answers.contributing,
        tests = answers.tests,
        username = answers.username,
        email = answers.email,
    )
}
