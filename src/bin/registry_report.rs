use chart_kindergarten::core::ChartType;
use chart_kindergarten::registry::{OptionRegistry, UNSUPPORTED_PARAMS};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct RegistryReport {
    schema_version: u32,
    options: Vec<OptionReport>,
    unsupported_params: Vec<&'static str>,
    params_without_implementation: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
struct OptionReport {
    keyword: &'static str,
    label: &'static str,
    target: chart_kindergarten::registry::KwargTarget,
    basic: bool,
    default: Option<serde_json::Value>,
    chart_types: Vec<&'static str>,
}

struct CliArgs {
    json: bool,
    chart_type: Option<ChartType>,
}

fn main() {
    let _ = chart_kindergarten::telemetry::init_default_tracing();
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(2),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = CliArgs {
        json: false,
        chart_type: None,
    };
    let mut raw = std::env::args().skip(1);
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--json" => args.json = true,
            "--chart-type" => {
                let value = raw
                    .next()
                    .ok_or_else(|| "--chart-type needs a value".to_owned())?;
                args.chart_type = Some(value.parse().map_err(|err| format!("{err}"))?);
            }
            other => return Err(format!("unknown argument `{other}`")),
        }
    }
    Ok(args)
}

/// Prints the registry; returns whether every constructor parameter is covered.
fn run() -> Result<bool, String> {
    let args = parse_args()?;
    let registry = OptionRegistry::build();

    let options: Vec<OptionReport> = registry
        .iter()
        .filter(|option| args.chart_type.is_none_or(|chart_type| option.is_applicable(chart_type)))
        .map(|option| OptionReport {
            keyword: option.keyword(),
            label: option.descriptor.label,
            target: option.descriptor.target,
            basic: option.descriptor.basic,
            default: option.descriptor.default_value(),
            chart_types: option.chart_types.iter().map(ChartType::as_str).collect(),
        })
        .collect();
    let report = RegistryReport {
        schema_version: 1,
        options,
        unsupported_params: UNSUPPORTED_PARAMS.to_vec(),
        params_without_implementation: registry
            .params_without_implementation()
            .iter()
            .copied()
            .collect(),
    };

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|err| format!("failed to serialize report: {err}"))?;
        println!("{json}");
    } else {
        for option in &report.options {
            println!(
                "{:<26} {:<13} {}",
                option.keyword,
                format!("{:?}", option.target),
                option.chart_types.join(",")
            );
        }
        println!(
            "\n{} options, {} unsupported parameters",
            report.options.len(),
            report.unsupported_params.len()
        );
        if report.params_without_implementation.is_empty() {
            println!("every constructor parameter has an option");
        } else {
            println!(
                "parameters without an option: {}",
                report.params_without_implementation.join(", ")
            );
        }
    }
    Ok(report.params_without_implementation.is_empty())
}
