use std::fs;

use propmeta::{
    Catalog, DescriptorKind, DirSchemaSource,
    data::accessor::{self, get_names},
};

const AWS_LAMBDA: &str = r#"{
  "component": {
    "kind": "component",
    "scheme": "aws-lambda",
    "syntax": "aws-lambda:function",
    "description": "The aws-lambda is used for managing and invoking functions from Amazon Web Service Lambda.",
    "label": "cloud,computing,serverless",
    "producerOnly": "true",
    "lenientProperties": "false"
  },
  "componentProperties": {
    "configuration": { "kind": "property", "type": "object", "javaType": "org.apache.camel.component.aws.lambda.LambdaConfiguration" },
    "accessKey": { "kind": "property", "type": "string", "secret": "true" },
    "secretKey": { "kind": "property", "type": "string", "secret": "true" },
    "region": { "kind": "property", "type": "string" }
  },
  "properties": {
    "function": { "kind": "path", "type": "string", "required": "true", "label": "producer" },
    "operation": { "kind": "parameter", "type": "object", "javaType": "org.apache.camel.component.aws.lambda.LambdaOperations",
      "enum": [ "listFunctions", "getFunction", "createFunction", "deleteFunction", "invokeFunction" ],
      "defaultValue": "invokeFunction", "required": "true", "label": "producer" },
    "awsLambdaClient": { "kind": "parameter", "type": "object", "label": "producer,advanced" },
    "proxyPort": { "kind": "parameter", "type": "integer", "label": "proxy" },
    "synchronous": { "kind": "parameter", "type": "boolean", "defaultValue": "false", "label": "advanced" },
    "headers": { "kind": "parameter", "type": "object", "prefix": "header.", "multiValue": "true" }
  }
}"#;

const MAIN: &str = r#"{
  "groups": [ { "name": "camel.main", "description": "Main configuration" } ],
  "properties": [
    { "name": "camel.main.auto-startup", "type": "boolean", "defaultValue": true },
    { "name": "camel.main.shutdown-timeout", "type": "int", "defaultValue": 45 },
    { "name": "camel.main.tracing-pattern", "type": "java.lang.String" },
    { "name": "camel.main.route-controller-backoff-multiplier", "type": "double" }
  ]
}"#;

fn setup() -> tempfile::TempDir {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("components")).unwrap();
    fs::write(dir.path().join("components/aws-lambda.json"), AWS_LAMBDA).unwrap();
    fs::write(dir.path().join("main.json"), MAIN).unwrap();
    dir
}

#[test]
fn component_descriptor_from_directory() {
    let dir = setup();
    let catalog = Catalog::new(DirSchemaSource::new(dir.path()));

    let info = catalog.info(DescriptorKind::Component, "aws-lambda").unwrap();
    assert!(accessor::is_component_producer_only(&info));
    assert!(!accessor::is_component_consumer_only(&info));
    assert!(!accessor::is_component_lenient_properties(&info));

    let props = catalog.properties(DescriptorKind::Component, "aws-lambda").unwrap();
    assert_eq!(
        get_names(&props).into_iter().collect::<Vec<_>>(),
        vec!["function", "operation", "awsLambdaClient", "proxyPort", "synchronous", "headers"]
    );
    assert_eq!(
        accessor::get_property_enum(&props, "operation"),
        Some("listFunctions,getFunction,createFunction,deleteFunction,invokeFunction")
    );
    assert!(accessor::is_property_required(&props, "OPERATION"));
    assert!(accessor::is_property_producer_only(&props, "awsLambdaClient"));
    assert!(accessor::is_property_integer(&props, "proxyPort"));
    assert!(accessor::is_property_boolean(&props, "synchronous"));
    assert_eq!(
        accessor::get_property_name_from_name_with_prefix(&props, "header.CamelAwsLambdaFunctionName"),
        Some("headers")
    );

    let comp = catalog.component_properties("aws-lambda").unwrap();
    assert_eq!(comp.len(), 4);
    assert_eq!(
        accessor::get_property_java_type(&comp, "configuration"),
        Some("org.apache.camel.component.aws.lambda.LambdaConfiguration")
    );
}

#[test]
fn main_descriptor_from_directory() {
    let dir = setup();
    let catalog = Catalog::new(DirSchemaSource::new(dir.path()));

    let rows = catalog.main_rows().unwrap();
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| !r.name().unwrap_or_default().contains('-')));

    assert!(accessor::is_property_boolean(&rows, "camel.main.autoStartup"));
    assert!(accessor::is_property_integer(&rows, "camel.main.shutdownTimeout"));
    assert_eq!(accessor::get_property_java_type(&rows, "camel.main.shutdownTimeout"), Some("int"));
    assert_eq!(accessor::get_property_default_value(&rows, "camel.main.shutdownTimeout"), Some("45"));
    assert!(accessor::is_property_number(&rows, "camel.main.routeControllerBackoffMultiplier"));
    assert_eq!(
        accessor::get_property_type(&rows, "camel.main.tracingPattern"),
        Some("string")
    );
}

#[test]
fn unknown_descriptor_yields_no_rows() {
    let dir = setup();
    let catalog = Catalog::new(DirSchemaSource::new(dir.path()));

    assert!(catalog.properties(DescriptorKind::Component, "kafka").unwrap().is_empty());
    assert!(catalog.info(DescriptorKind::Model, "split").unwrap().is_empty());
}
