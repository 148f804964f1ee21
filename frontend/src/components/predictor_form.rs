use super::super::{Model, Msg};
use super::results::render_results;
use super::utils::{debounce, render_error_message};
use shared::PatientRecord;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Inputs of the prediction form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Age,
    Bmi,
    Glucose,
    BloodPressure,
    Insulin,
    FamilyHistory,
    Activity,
    Diet,
    Stress,
}

impl Field {
    /// Parses `raw` into the record. Returns false, leaving the record
    /// untouched, when the text does not parse.
    pub fn apply(self, record: &mut PatientRecord, raw: &str) -> bool {
        let raw = raw.trim();
        match self {
            Field::Age => raw.parse().map(|v| record.age = v).is_ok(),
            Field::Bmi => raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(|v| record.bmi = v)
                .is_some(),
            Field::Glucose => raw.parse().map(|v| record.glucose_level = v).is_ok(),
            Field::BloodPressure => raw.parse().map(|v| record.blood_pressure = v).is_ok(),
            Field::Insulin => raw.parse().map(|v| record.insulin_level = v).is_ok(),
            Field::FamilyHistory => match raw {
                "Yes" => {
                    record.family_history = 1;
                    true
                }
                "No" => {
                    record.family_history = 0;
                    true
                }
                _ => false,
            },
            Field::Activity => raw.parse().map(|v| record.physical_activity = v).is_ok(),
            Field::Diet => raw.parse().map(|v| record.diet_score = v).is_ok(),
            Field::Stress => raw.parse().map(|v| record.stress_level = v).is_ok(),
        }
    }
}

fn number_input(
    ctx: &Context<Model>,
    label: &'static str,
    field: Field,
    value: String,
    (min, max, step): (&'static str, &'static str, &'static str),
) -> Html {
    let oninput = ctx.link().callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FieldChanged(field, input.value())
    });

    html! {
        <label class="form-field">
            <span>{ label }</span>
            <input type="number" {min} {max} {step} value={value} {oninput} />
        </label>
    }
}

fn slider(
    ctx: &Context<Model>,
    label: &'static str,
    help: &'static str,
    field: Field,
    value: u8,
) -> Html {
    let oninput = ctx.link().callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FieldChanged(field, input.value())
    });

    html! {
        <label class="form-field" title={help}>
            <span>{ format!("{}: {}", label, value) }</span>
            <input type="range" min="1" max="5" step="1" value={value.to_string()} {oninput} />
            <small>{ help }</small>
        </label>
    }
}

fn render_family_history(model: &Model, ctx: &Context<Model>) -> Html {
    let onchange = ctx.link().callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::FieldChanged(Field::FamilyHistory, select.value())
    });
    let has_history = model.record.has_family_history();

    html! {
        <label class="form-field">
            <span>{"Family History of Diabetes"}</span>
            <select {onchange}>
                <option value="No" selected={!has_history}>{"No"}</option>
                <option value="Yes" selected={has_history}>{"Yes"}</option>
            </select>
        </label>
    }
}

/// Renders the diabetes prediction interface
pub fn render_predictor(model: &Model, ctx: &Context<Model>) -> Html {
    let record = &model.record;
    let link = ctx.link().clone();

    html! {
        <section class="predictor">
            <h2>{"🩺 Diabetes Risk Prediction"}</h2>
            <div class="columns">
                <div class="feature-card">
                    <h3>{"Patient Information"}</h3>
                    { number_input(ctx, "Age (years)", Field::Age, record.age.to_string(), ("18", "100", "1")) }
                    { number_input(ctx, "BMI", Field::Bmi, record.bmi.to_string(), ("15.0", "50.0", "0.1")) }
                    { number_input(ctx, "Glucose Level (mg/dL)", Field::Glucose, record.glucose_level.to_string(), ("70", "300", "1")) }
                    { number_input(ctx, "Blood Pressure (systolic)", Field::BloodPressure, record.blood_pressure.to_string(), ("90", "200", "1")) }
                    { number_input(ctx, "Insulin Level (μU/mL)", Field::Insulin, record.insulin_level.to_string(), ("20", "200", "1")) }
                </div>
                <div class="feature-card">
                    <h3>{"Lifestyle Factors"}</h3>
                    { render_family_history(model, ctx) }
                    { slider(ctx, "Physical Activity Level", "1=Very Low, 5=Very High", Field::Activity, record.physical_activity) }
                    { slider(ctx, "Diet Quality Score", "1=Poor, 5=Excellent", Field::Diet, record.diet_score) }
                    { slider(ctx, "Stress Level", "1=Very Low, 5=Very High", Field::Stress, record.stress_level) }
                </div>
            </div>

            <button
                class="analyze-btn primary"
                disabled={model.loading}
                onclick={debounce(300, move || link.send_message(Msg::Predict))}
            >
                {
                    if model.loading {
                        "Analyzing patient data..."
                    } else {
                        "Predict Diabetes Risk"
                    }
                }
            </button>

            { render_error_message(model) }
            { render_results(model) }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_fields_parse_into_record() {
        let mut record = PatientRecord::default();
        assert!(Field::Age.apply(&mut record, "61"));
        assert!(Field::Bmi.apply(&mut record, " 31.7 "));
        assert!(Field::Stress.apply(&mut record, "5"));
        assert_eq!(record.age, 61);
        assert_eq!(record.bmi, 31.7);
        assert_eq!(record.stress_level, 5);
    }

    #[test]
    fn family_history_maps_yes_no() {
        let mut record = PatientRecord::default();
        assert!(Field::FamilyHistory.apply(&mut record, "Yes"));
        assert_eq!(record.family_history, 1);
        assert!(Field::FamilyHistory.apply(&mut record, "No"));
        assert_eq!(record.family_history, 0);
        assert!(!Field::FamilyHistory.apply(&mut record, "Maybe"));
    }

    #[test]
    fn unparsable_input_keeps_previous_value() {
        let mut record = PatientRecord::default();
        assert!(!Field::Glucose.apply(&mut record, ""));
        assert!(!Field::Bmi.apply(&mut record, "NaN"));
        assert!(!Field::Age.apply(&mut record, "-3"));
        assert_eq!(record, PatientRecord::default());
    }
}
