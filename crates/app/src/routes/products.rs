use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdPackage, LdSearch};
use dioxus_free_icons::Icon;
use shared_types::dashboard::{
    filter_products, sample_products, stock_summary, Product, ProductView, StockStatus,
};

/// Editable copy of a product while a form is open.
#[derive(Clone, Debug, Default, PartialEq)]
struct ProductForm {
    name: String,
    sku: String,
    category: String,
    price: String,
    stock: String,
}

impl From<&Product> for ProductForm {
    fn from(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            sku: p.sku.clone(),
            category: p.category.clone(),
            price: format!("{:.2}", p.price),
            stock: p.stock.to_string(),
        }
    }
}

fn status_class(status: StockStatus) -> &'static str {
    match status {
        StockStatus::InStock => "badge badge-success",
        StockStatus::LowStock => "badge badge-warning",
        StockStatus::OutOfStock => "badge badge-danger",
    }
}

/// Product catalogue for the inventory dashboard: list, detail, edit and
/// create screens over the sample catalogue. Nothing is saved.
#[component]
pub fn ProductManager() -> Element {
    let products = use_hook(sample_products);
    let mut view = use_signal(ProductView::default);
    let mut search = use_signal(String::new);
    let mut notice = use_signal(|| Option::<&'static str>::None);
    let mut form = use_signal(ProductForm::default);

    let selected = view()
        .selected_id()
        .and_then(|id| products.iter().find(|p| p.id == id).cloned());

    let mut open = move |next: ProductView, product: Option<&Product>| {
        form.set(product.map(ProductForm::from).unwrap_or_default());
        notice.set(None);
        view.set(next);
    };

    let mut submit = move || {
        let (next, msg) = view().submit();
        view.set(next);
        notice.set(msg);
    };

    let mut delete = move || {
        let (next, msg) = view().delete();
        view.set(next);
        notice.set(msg);
    };

    let form_view = move |title: &'static str, action: &'static str| {
        rsx! {
            section { class: "panel",
                div { class: "panel-header",
                    button {
                        class: "button button-ghost",
                        r#type: "button",
                        onclick: move |_| view.set(ProductView::List),
                        "← Back"
                    }
                    h3 { class: "panel-title", "{title}" }
                }
                form {
                    class: "product-form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        submit();
                    },
                    input {
                        placeholder: "Product name",
                        value: "{form.read().name}",
                        oninput: move |e: FormEvent| form.write().name = e.value(),
                    }
                    input {
                        placeholder: "SKU",
                        value: "{form.read().sku}",
                        oninput: move |e: FormEvent| form.write().sku = e.value(),
                    }
                    input {
                        placeholder: "Category",
                        value: "{form.read().category}",
                        oninput: move |e: FormEvent| form.write().category = e.value(),
                    }
                    input {
                        r#type: "number",
                        step: "0.01",
                        placeholder: "Price",
                        value: "{form.read().price}",
                        oninput: move |e: FormEvent| form.write().price = e.value(),
                    }
                    input {
                        r#type: "number",
                        placeholder: "Stock",
                        value: "{form.read().stock}",
                        oninput: move |e: FormEvent| form.write().stock = e.value(),
                    }
                    div { class: "form-actions",
                        button { class: "button button-primary", r#type: "submit", "{action}" }
                        button {
                            class: "button button-outline",
                            r#type: "button",
                            onclick: move |_| view.set(ProductView::List),
                            "Cancel"
                        }
                    }
                }
            }
        }
    };

    let body = match (view(), selected) {
        (ProductView::Create, _) => form_view("New product", "Create product"),
        (ProductView::Edit(_), Some(_)) => form_view("Edit product", "Save changes"),
        (ProductView::Detail(_), Some(product)) => {
            let status = product.stock_status();
            let for_edit = product.clone();
            rsx! {
                section { class: "panel",
                    div { class: "panel-header",
                        button {
                            class: "button button-ghost",
                            r#type: "button",
                            onclick: move |_| view.set(ProductView::List),
                            "← Back"
                        }
                        h3 { class: "panel-title", "{product.name}" }
                        span { class: status_class(status), "{status.label()}" }
                    }
                    dl { class: "product-details",
                        dt { "SKU" }
                        dd { "{product.sku}" }
                        dt { "Category" }
                        dd { "{product.category}" }
                        dt { "Price" }
                        dd { "{product.price:.2}" }
                        dt { "Stock" }
                        dd { "{product.stock} units" }
                    }
                    div { class: "form-actions",
                        button {
                            class: "button button-outline",
                            r#type: "button",
                            onclick: move |_| open(ProductView::Edit(for_edit.id), Some(&for_edit)),
                            "Edit"
                        }
                        button {
                            class: "button button-danger",
                            r#type: "button",
                            onclick: move |_| delete(),
                            "Delete"
                        }
                    }
                }
            }
        }
        _ => {
            let visible = filter_products(&products, &search.read());
            let summary = stock_summary(&visible);
            rsx! {
                section { class: "panel",
                    div { class: "panel-header",
                        h3 { class: "panel-title",
                            Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 }
                            "Products"
                        }
                        div { class: "search-box",
                            Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                            input {
                                placeholder: "Search products...",
                                value: "{search}",
                                oninput: move |e: FormEvent| search.set(e.value()),
                            }
                        }
                        button {
                            class: "button button-primary",
                            r#type: "button",
                            onclick: move |_| open(ProductView::Create, None),
                            "New product"
                        }
                    }
                    table { class: "table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "SKU" }
                                th { "Category" }
                                th { "Price" }
                                th { "Stock" }
                                th { "Status" }
                                th {}
                            }
                        }
                        tbody {
                            for product in visible {
                                {
                                    let status = product.stock_status();
                                    let id = product.id;
                                    let for_edit = product.clone();
                                    rsx! {
                                        tr { key: "{id}",
                                            td { "{product.name}" }
                                            td { "{product.sku}" }
                                            td { "{product.category}" }
                                            td { "{product.price:.2}" }
                                            td { "{product.stock}" }
                                            td { span { class: status_class(status), "{status.label()}" } }
                                            td { class: "row-actions",
                                                button {
                                                    class: "button button-ghost",
                                                    r#type: "button",
                                                    onclick: move |_| open(ProductView::Detail(id), None),
                                                    "View"
                                                }
                                                button {
                                                    class: "button button-ghost",
                                                    r#type: "button",
                                                    onclick: move |_| open(ProductView::Edit(id), Some(&for_edit)),
                                                    "Edit"
                                                }
                                                button {
                                                    class: "button button-ghost button-danger",
                                                    r#type: "button",
                                                    onclick: move |_| delete(),
                                                    "Delete"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    p { class: "stock-summary",
                        "{summary.in_stock} in stock · {summary.low_stock} low · {summary.out_of_stock} out of stock"
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "product-manager",
            if let Some(msg) = notice() {
                div { class: "notice", role: "status", "{msg}" }
            }
            {body}
        }
    }
}
