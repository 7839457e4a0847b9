use crate::bom_generation::domain::{BomResult, Coordinate};
use crate::ports::outbound::BomFormatter;
use crate::shared::Result;
use std::fmt::Write;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

const PROJECT_OPEN: &str = "<project xmlns=\"http://maven.apache.org/POM/4.0.0\" \
     xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
     xsi:schemaLocation=\"http://maven.apache.org/POM/4.0.0 \
http://maven.apache.org/xsd/maven-4.0.0.xsd\">\n";

/// PomFormatter adapter rendering the assembled BOM as a Maven POM
/// document.
///
/// This adapter implements the BomFormatter port for the `pom` output
/// format: modelVersion 4.0.0, packaging fixed to `pom`, properties in
/// insertion order, then the managed dependencies with their optional
/// classifier, type and exclusions.
#[derive(Debug, Default)]
pub struct PomFormatter;

impl PomFormatter {
    pub fn new() -> Self {
        Self
    }

    fn write_dependency(output: &mut String, dependency: &Coordinate) {
        output.push_str("      <dependency>\n");
        write_element(output, 8, "groupId", dependency.group_id());
        write_element(output, 8, "artifactId", dependency.artifact_id());
        write_element(output, 8, "version", dependency.version());
        if let Some(classifier) = dependency.classifier() {
            write_element(output, 8, "classifier", classifier);
        }
        if let Some(packaging) = dependency.packaging() {
            write_element(output, 8, "type", packaging);
        }
        if !dependency.exclusions().is_empty() {
            output.push_str("        <exclusions>\n");
            for exclusion in dependency.exclusions() {
                output.push_str("          <exclusion>\n");
                write_element(output, 12, "groupId", &exclusion.group_id);
                write_element(output, 12, "artifactId", &exclusion.artifact_id);
                output.push_str("          </exclusion>\n");
            }
            output.push_str("        </exclusions>\n");
        }
        output.push_str("      </dependency>\n");
    }
}

impl BomFormatter for PomFormatter {
    fn format(&self, bom: &BomResult) -> Result<String> {
        let mut output = String::new();
        output.push_str(XML_DECLARATION);
        output.push_str(PROJECT_OPEN);
        output.push_str("  <modelVersion>4.0.0</modelVersion>\n");

        write_element(&mut output, 2, "groupId", &bom.identity.group_id);
        write_element(&mut output, 2, "artifactId", &bom.identity.artifact_id);
        write_element(&mut output, 2, "version", &bom.identity.version);
        output.push_str("  <packaging>pom</packaging>\n");
        if !bom.identity.name.is_empty() {
            write_element(&mut output, 2, "name", &bom.identity.name);
        }
        if !bom.identity.description.is_empty() {
            write_element(&mut output, 2, "description", &bom.identity.description);
        }

        if !bom.properties.is_empty() {
            output.push_str("  <properties>\n");
            for (key, value) in bom.properties.iter() {
                write_element(&mut output, 4, key, value);
            }
            output.push_str("  </properties>\n");
        }

        output.push_str("  <dependencyManagement>\n");
        output.push_str("    <dependencies>\n");
        for dependency in &bom.managed_dependencies {
            Self::write_dependency(&mut output, dependency);
        }
        output.push_str("    </dependencies>\n");
        output.push_str("  </dependencyManagement>\n");

        output.push_str("</project>\n");
        Ok(output)
    }
}

fn write_element(output: &mut String, indent: usize, tag: &str, text: &str) {
    // String formatting never fails; the Write trait just demands a Result.
    let _ = writeln!(
        output,
        "{:indent$}<{tag}>{}</{tag}>",
        "",
        xml_escape(text),
        indent = indent,
        tag = tag
    );
}

fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bom_generation::domain::{
        BomIdentity, Coordinate, DependencyRef, OrderedProperties,
    };

    fn bom() -> BomResult {
        let mut properties = OrderedProperties::new();
        properties.put("project.build.sourceEncoding", "UTF-8");
        properties.put("version.org.example", "1.0");

        BomResult {
            identity: BomIdentity::new("org.example", "example-bom", "1.0.0")
                .with_name("Example BOM")
                .with_description("Managed versions"),
            properties,
            managed_dependencies: vec![
                Coordinate::new("org.example", "widget", "${version.org.example}").unwrap(),
            ],
        }
    }

    #[test]
    fn test_format_basic_structure() {
        let output = PomFormatter::new().format(&bom()).unwrap();

        assert!(output.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(output.contains("<modelVersion>4.0.0</modelVersion>"));
        assert!(output.contains("<groupId>org.example</groupId>"));
        assert!(output.contains("<artifactId>example-bom</artifactId>"));
        assert!(output.contains("<packaging>pom</packaging>"));
        assert!(output.contains("<name>Example BOM</name>"));
        assert!(output.contains("<description>Managed versions</description>"));
        assert!(output.contains("<version>${version.org.example}</version>"));
        assert!(output.trim_end().ends_with("</project>"));
    }

    #[test]
    fn test_properties_are_rendered_in_insertion_order() {
        let output = PomFormatter::new().format(&bom()).unwrap();

        let encoding = output.find("project.build.sourceEncoding").unwrap();
        let version = output.find("version.org.example").unwrap();
        assert!(encoding < version);
    }

    #[test]
    fn test_empty_name_and_description_are_omitted() {
        let mut bom = bom();
        bom.identity.name = String::new();
        bom.identity.description = String::new();

        let output = PomFormatter::new().format(&bom).unwrap();
        assert!(!output.contains("<name>"));
        assert!(!output.contains("<description>"));
    }

    #[test]
    fn test_classifier_type_and_exclusions_are_rendered() {
        let mut bom = bom();
        bom.managed_dependencies = vec![Coordinate::new("g", "a", "1.0")
            .unwrap()
            .with_classifier(Some("tests".to_string()))
            .with_packaging(Some("test-jar".to_string()))
            .with_exclusion(DependencyRef::new("x", "y"))];

        let output = PomFormatter::new().format(&bom).unwrap();
        assert!(output.contains("<classifier>tests</classifier>"));
        assert!(output.contains("<type>test-jar</type>"));
        assert!(output.contains("<exclusions>"));
        assert!(output.contains("<groupId>x</groupId>"));
        assert!(output.contains("<artifactId>y</artifactId>"));
    }

    #[test]
    fn test_absent_classifier_and_type_are_omitted() {
        let output = PomFormatter::new().format(&bom()).unwrap();
        assert!(!output.contains("<classifier>"));
        assert!(!output.contains("<type>"));
    }

    #[test]
    fn test_text_content_is_xml_escaped() {
        let mut bom = bom();
        bom.identity.description = "versions < 2.0 & friends".to_string();

        let output = PomFormatter::new().format(&bom).unwrap();
        assert!(output.contains("versions &lt; 2.0 &amp; friends"));
    }
}
