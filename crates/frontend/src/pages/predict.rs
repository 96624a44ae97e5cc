//! Profit analysis screen: an eight-field form, a synchronous profit
//! computation, and a client-side CSV export of the accumulated entries.

use contracts::{coerce_number, compute_profit, FormEntry, ProfitRecord, ProfitResult};
use leptos::prelude::*;

use crate::shared::components::ui::{Button, Input};
use crate::shared::export::{export_to_csv, CsvExportable};

const EXPORT_FILENAME: &str = "profit_data.csv";

/// Raw form field signals. Numeric fields stay strings until "Add";
/// anything unparseable counts as zero then.
#[derive(Clone, Copy)]
struct EntryForm {
    retailer: RwSignal<String>,
    region: RwSignal<String>,
    state: RwSignal<String>,
    city: RwSignal<String>,
    product: RwSignal<String>,
    price_per_unit: RwSignal<String>,
    unit_sold: RwSignal<String>,
    cost_per_unit: RwSignal<String>,
}

impl EntryForm {
    fn new() -> Self {
        Self {
            retailer: RwSignal::new(String::new()),
            region: RwSignal::new(String::new()),
            state: RwSignal::new(String::new()),
            city: RwSignal::new(String::new()),
            product: RwSignal::new(String::new()),
            price_per_unit: RwSignal::new(String::new()),
            unit_sold: RwSignal::new(String::new()),
            cost_per_unit: RwSignal::new(String::new()),
        }
    }

    fn snapshot(&self) -> FormEntry {
        FormEntry {
            retailer: self.retailer.get_untracked(),
            region: self.region.get_untracked(),
            state: self.state.get_untracked(),
            city: self.city.get_untracked(),
            product: self.product.get_untracked(),
            price_per_unit: coerce_number(&self.price_per_unit.get_untracked()),
            unit_sold: coerce_number(&self.unit_sold.get_untracked()),
            cost_per_unit: coerce_number(&self.cost_per_unit.get_untracked()),
        }
    }

    fn reset(&self) {
        for field in [
            self.retailer,
            self.region,
            self.state,
            self.city,
            self.product,
            self.price_per_unit,
            self.unit_sold,
            self.cost_per_unit,
        ] {
            field.set(String::new());
        }
    }
}

/// Formats an input-derived number the way it was typed: whole values
/// without a decimal point.
fn format_field(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

impl CsvExportable for ProfitRecord {
    fn headers() -> Vec<&'static str> {
        vec![
            "retailer",
            "region",
            "state",
            "city",
            "product",
            "pricePerUnit",
            "unitSold",
            "costPerUnit",
            "profitAmount",
            "profitPercentage",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.entry.retailer.clone(),
            self.entry.region.clone(),
            self.entry.state.clone(),
            self.entry.city.clone(),
            self.entry.product.clone(),
            format_field(self.entry.price_per_unit),
            format_field(self.entry.unit_sold),
            format_field(self.entry.cost_per_unit),
            format!("{:.2}", self.result.profit_amount),
            format!("{:.2}", self.result.profit_percentage),
        ]
    }
}

#[component]
pub fn PredictPage() -> impl IntoView {
    let form = EntryForm::new();
    let (result, set_result) = signal(Option::<ProfitResult>::None);
    let (records, set_records) = signal(Vec::<ProfitRecord>::new());

    let on_add = move |_| {
        let entry = form.snapshot();
        let result = compute_profit(&entry);

        // Replaces whatever result was shown before.
        set_result.set(Some(result));
        set_records.update(|records| records.push(ProfitRecord { entry, result }));
        form.reset();
    };

    let on_download = move |_| {
        let records = records.get_untracked();
        if let Err(err) = export_to_csv(&records, EXPORT_FILENAME) {
            log::error!("CSV export failed: {err}");
        }
    };

    let field = move |signal: RwSignal<String>, name: &'static str, placeholder: &'static str| {
        view! {
            <Input
                name=name
                placeholder=placeholder
                value=signal
                on_input=Callback::new(move |v| signal.set(v))
            />
        }
    };

    let numeric_field =
        move |signal: RwSignal<String>, name: &'static str, placeholder: &'static str| {
            view! {
                <Input
                    name=name
                    input_type="number"
                    placeholder=placeholder
                    value=signal
                    on_input=Callback::new(move |v| signal.set(v))
                />
            }
        };

    view! {
        <div class="predict">
            <h1>"Profit Analysis"</h1>

            {move || {
                result.get().map(|r| {
                    view! {
                        <div class="result">
                            <h2>"Profit Analysis Results"</h2>
                            <p>"Profit Amount: $" {format!("{:.2}", r.profit_amount)}</p>
                            <p>"Profit Percentage: " {format!("{:.2}", r.profit_percentage)} "%"</p>
                        </div>
                    }
                })
            }}

            <div class="form-container">
                <div class="form-grid">
                    {field(form.retailer, "retailer", "Retailer")}
                    {field(form.region, "region", "Region")}
                    {field(form.state, "state", "State")}
                    {field(form.city, "city", "City")}
                    {field(form.product, "product", "Product")}
                    {numeric_field(form.price_per_unit, "pricePerUnit", "Price per Unit")}
                    {numeric_field(form.unit_sold, "unitSold", "Units Sold")}
                    {numeric_field(form.cost_per_unit, "costPerUnit", "Cost per Unit")}
                </div>
                <Button on_click=Callback::new(on_add)>"Add"</Button>
            </div>

            <Show when=move || !records.get().is_empty()>
                <div class="download-container">
                    <Button variant="secondary" on_click=Callback::new(on_download)>
                        "Download CSV"
                    </Button>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_csv;

    fn record() -> ProfitRecord {
        let entry = FormEntry {
            retailer: "Foot Locker".to_string(),
            region: "Northeast".to_string(),
            state: "New York".to_string(),
            city: "New York".to_string(),
            product: "Street Footwear".to_string(),
            price_per_unit: 10.0,
            unit_sold: 5.0,
            cost_per_unit: 6.0,
        };
        let result = compute_profit(&entry);
        ProfitRecord { entry, result }
    }

    #[test]
    fn headers_match_form_field_names() {
        assert_eq!(
            ProfitRecord::headers(),
            vec![
                "retailer",
                "region",
                "state",
                "city",
                "product",
                "pricePerUnit",
                "unitSold",
                "costPerUnit",
                "profitAmount",
                "profitPercentage",
            ]
        );
    }

    #[test]
    fn row_carries_entry_and_rounded_metrics() {
        let row = record().to_csv_row();
        assert_eq!(row.len(), ProfitRecord::headers().len());
        assert_eq!(row[0], "Foot Locker");
        assert_eq!(row[5], "10");
        assert_eq!(row[6], "5");
        assert_eq!(row[7], "6");
        assert_eq!(row[8], "20.00");
        assert_eq!(row[9], "66.67");
    }

    #[test]
    fn export_renders_full_csv() {
        let csv = build_csv(&[record()]);
        assert_eq!(
            csv,
            "retailer,region,state,city,product,pricePerUnit,unitSold,costPerUnit,profitAmount,profitPercentage\n\
             Foot Locker,Northeast,New York,New York,Street Footwear,10,5,6,20.00,66.67\n"
        );
    }

    #[test]
    fn format_field_keeps_typed_shape() {
        assert_eq!(format_field(10.0), "10");
        assert_eq!(format_field(10.5), "10.5");
        assert_eq!(format_field(0.0), "0");
    }
}
