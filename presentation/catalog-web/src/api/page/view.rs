use business::domain::catalog::dialog::{ActiveDialog, AddDialog};
use business::domain::product::model::Product;
use business::domain::product::value_objects::{ImageKind, ProductImage};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 2rem; color: #1e293b; }
header { display: flex; justify-content: space-between; align-items: center; }
table { width: 100%; border-collapse: collapse; margin-top: 1rem; }
th, td { padding: 0.5rem 0.75rem; border-bottom: 1px solid #e2e8f0; text-align: left; }
td img { width: 48px; height: 48px; object-fit: cover; border-radius: 4px; }
button { cursor: pointer; padding: 0.4rem 0.9rem; border-radius: 4px; border: 1px solid #94a3b8; background: #fff; }
button.primary { background: #2563eb; border-color: #2563eb; color: #fff; }
button.danger { background: #dc2626; border-color: #dc2626; color: #fff; }
.backdrop { position: fixed; inset: 0; background: rgba(15, 23, 42, 0.45); display: flex; align-items: center; justify-content: center; }
.modal { background: #fff; border-radius: 8px; padding: 1.5rem; min-width: 340px; }
.modal label { display: block; margin-bottom: 0.75rem; }
.modal input { display: block; width: 100%; margin-top: 0.25rem; }
.modal .preview { max-width: 160px; max-height: 160px; display: block; margin-bottom: 0.75rem; }
.modal .error { color: #dc2626; }
.hint { color: #64748b; font-size: 0.85rem; }
.hint.warning { color: #b45309; }
.modal .actions { display: flex; justify-content: flex-end; gap: 0.5rem; }
"#;

/// Renders the catalog table with the active dialog on top of it.
pub fn render_page(products: &[Product], dialog: &ActiveDialog) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Products</title>
<style>{}</style>
</head>
<body>
<header><h1>Products</h1><button type="button" class="primary" data-action="open-add">Add New Product</button></header>
<table>
<thead><tr><th>Image</th><th>Name</th><th>Product Code</th><th>Date</th><th>Actions</th></tr></thead>
<tbody>{}</tbody>
</table>
{}
<script src="/static/catalog.js"></script>
</body>
</html>"#,
        STYLE,
        render_rows(products),
        render_dialog(dialog)
    )
}

fn render_rows(products: &[Product]) -> String {
    if products.is_empty() {
        return r#"<tr><td colspan="5">No products yet.</td></tr>"#.to_string();
    }

    let mut rows = String::new();
    for product in products {
        let name = html_escape(&product.name);
        rows.push_str(&format!(
            r#"<tr data-id="{id}"><td>{image}</td><td>{name}</td><td>{code}</td><td>{date}</td><td><button type="button" data-action="open-edit" data-id="{id}">Edit</button> <button type="button" data-action="open-delete" data-id="{id}">Delete</button></td></tr>"#,
            id = product.id,
            image = render_thumbnail(&product.image, &name),
            name = name,
            code = product.product_code,
            date = product.date,
        ));
    }
    rows
}

fn render_thumbnail(image: &ProductImage, alt: &str) -> String {
    match image.kind() {
        ImageKind::Remote | ImageKind::Embedded => format!(
            r#"<img src="{}" alt="{}">"#,
            html_escape(image.as_str()),
            alt
        ),
        ImageKind::Other => r#"<span class="hint">No preview</span>"#.to_string(),
    }
}

/// Describes the typed image source under the edit dialog's image field.
fn render_image_source_hint(image: &ProductImage) -> String {
    let src = html_escape(image.as_str());
    match image.kind() {
        ImageKind::Remote => format!(
            r#"<p class="hint">Remote image</p><img class="preview" src="{}" alt="Current image">"#,
            src
        ),
        ImageKind::Embedded => format!(
            r#"<p class="hint">Embedded image</p><img class="preview" src="{}" alt="Current image">"#,
            src
        ),
        ImageKind::Other => r#"<p class="hint warning">Not a URL or data URI; the image may not display.</p>"#
            .to_string(),
    }
}

fn render_dialog(dialog: &ActiveDialog) -> String {
    let (title, body) = match dialog {
        ActiveDialog::Closed => return String::new(),
        ActiveDialog::Add(add) => ("Add New Product", render_add(add)),
        ActiveDialog::Edit(product) => ("Edit Product", render_edit(product)),
        ActiveDialog::Delete(product) => ("Delete Product", render_delete(product)),
    };

    format!(
        r#"<div class="backdrop"><div class="modal" role="dialog" aria-modal="true" aria-labelledby="dialog-title" data-dialog="{}"><h2 id="dialog-title">{}</h2>{}</div></div>"#,
        dialog.kind(),
        title,
        body
    )
}

fn render_add(add: &AddDialog) -> String {
    let draft = &add.draft;
    let preview = if draft.image_pending {
        r#"<p class="pending">Loading image...</p>"#.to_string()
    } else if let Some(image) = &draft.image {
        format!(
            r#"<img class="preview" src="{}" alt="Selected image">"#,
            html_escape(image.as_str())
        )
    } else {
        String::new()
    };
    let error = add
        .error
        .as_deref()
        .map(|message| format!(r#"<p class="error" role="alert">{}</p>"#, html_escape(message)))
        .unwrap_or_default();

    format!(
        r#"<form data-form="add">
<label>Name<input name="name" value="{}"></label>
<label>Product Code<input name="product_code" inputmode="numeric" data-digits-only value="{}"></label>
<label>Date<input type="date" name="date" value="{}"></label>
<label>Image<input type="file" name="image" accept="image/*"></label>
{}{}
<div class="actions"><button type="button" data-action="cancel-add">Cancel</button><button type="button" class="primary" data-action="confirm-add">Save</button></div>
</form>"#,
        html_escape(&draft.name),
        html_escape(&draft.product_code),
        draft.date.map(|d| d.to_picker_value()).unwrap_or_default(),
        preview,
        error
    )
}

fn render_edit(product: &Product) -> String {
    format!(
        r#"<form data-form="edit">
<label>Name<input name="name" value="{}"></label>
<label>Product Code<input name="product_code" inputmode="numeric" data-digits-only value="{}"></label>
<label>Image<input name="image" value="{}"></label>
{}
<label>Date<input type="date" name="date" value="{}"></label>
<div class="actions"><button type="button" data-action="cancel-edit">Cancel</button><button type="button" class="primary" data-action="confirm-edit">Update</button></div>
</form>"#,
        html_escape(&product.name),
        product.product_code,
        html_escape(product.image.as_str()),
        render_image_source_hint(&product.image),
        product.date.to_picker_value()
    )
}

fn render_delete(product: &Product) -> String {
    format!(
        r#"<p>Are you sure you want to delete <strong>{}</strong>?</p>
<div class="actions"><button type="button" data-action="cancel-delete">Cancel</button><button type="button" class="danger" data-action="confirm-delete">Delete</button></div>"#,
        html_escape(&product.name)
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::catalog::dialog::{AddDraftEdit, DialogState, REQUIRED_FIELDS_MESSAGE};
    use business::domain::product::value_objects::{ProductCode, ProductId};

    fn product(id: i64, name: &str) -> Product {
        Product::from_repository(
            ProductId::new(id),
            name.to_string(),
            ProductCode::new(12345),
            "16.04.2024".parse().unwrap(),
            ProductImage::new("https://picsum.photos/id/228/200/300"),
        )
    }

    #[test]
    fn should_render_one_row_per_product_in_order() {
        let html = render_page(
            &[product(1, "Product 1"), product(2, "Product 2")],
            &ActiveDialog::Closed,
        );

        let first = html.find("<td>Product 1</td>").unwrap();
        let second = html.find("<td>Product 2</td>").unwrap();
        assert!(first < second);
        assert!(html.contains("<td>12345</td><td>16.04.2024</td>"));
        assert!(!html.contains("role=\"dialog\""));
    }

    #[test]
    fn should_escape_product_names() {
        let html = render_page(&[product(1, "<b>\"Milk\" & co</b>")], &ActiveDialog::Closed);

        assert!(html.contains("&lt;b&gt;&quot;Milk&quot; &amp; co&lt;/b&gt;"));
        assert!(!html.contains("<b>\"Milk\""));
    }

    #[test]
    fn should_show_placeholder_for_empty_catalog() {
        let html = render_page(&[], &ActiveDialog::Closed);

        assert!(html.contains("No products yet."));
        assert!(html.contains("Add New Product"));
    }

    #[test]
    fn should_render_add_dialog_with_error_and_picker_date() {
        let mut state = DialogState::new();
        state.open_add().unwrap();
        let add = state.add_dialog_mut().unwrap();
        add.draft
            .apply(AddDraftEdit {
                name: Some("B".to_string()),
                product_code: Some("200".to_string()),
                date: Some("02.02.2024".to_string()),
            })
            .unwrap();
        add.error = Some(REQUIRED_FIELDS_MESSAGE.to_string());

        let html = render_page(&[], state.active());

        assert!(html.contains(r#"data-dialog="add""#));
        assert!(html.contains(r#"name="date" value="2024-02-02""#));
        assert!(html.contains(REQUIRED_FIELDS_MESSAGE));
        assert!(html.contains(">Save</button>"));
    }

    #[test]
    fn should_render_edit_dialog_prefilled() {
        let html = render_page(&[], &ActiveDialog::Edit(product(1, "Product 1")));

        assert!(html.contains(r#"name="name" value="Product 1""#));
        assert!(html.contains(r#"name="product_code" inputmode="numeric" data-digits-only value="12345""#));
        assert!(html.contains(">Update</button>"));
    }

    #[test]
    fn should_preview_remote_image_in_edit_dialog() {
        let html = render_page(&[], &ActiveDialog::Edit(product(1, "Product 1")));

        assert!(html.contains(r#"<p class="hint">Remote image</p>"#));
        assert!(html.contains(
            r#"<img class="preview" src="https://picsum.photos/id/228/200/300" alt="Current image">"#
        ));
    }

    #[test]
    fn should_warn_about_free_text_image_source() {
        let mut edited = product(1, "Product 1");
        edited.image = ProductImage::new("photo of milk");

        let html = render_page(&[edited.clone()], &ActiveDialog::Edit(edited));

        assert!(html.contains("Not a URL or data URI"));
        assert!(!html.contains(r#"src="photo of milk""#));
        assert!(html.contains(r#"<td><span class="hint">No preview</span></td>"#));
    }

    #[test]
    fn should_name_product_in_delete_prompt() {
        let html = render_page(&[], &ActiveDialog::Delete(product(3, "Product 3")));

        assert!(html.contains("Are you sure you want to delete <strong>Product 3</strong>?"));
        assert!(html.contains(r#"data-action="confirm-delete""#));
    }
}
