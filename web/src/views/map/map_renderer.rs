use leptos::{logging::error, prelude::*};
use leptos_leaflet::{leaflet::Map, prelude::*};
use shared_types::Coordinate;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const PICKER_ZOOM: f64 = 6.0;

#[component]
pub fn PickerMap(
    center: Coordinate,
    picked: RwSignal<Option<Coordinate>>,
    #[prop(into)] on_pick: Callback<Coordinate>,
) -> impl IntoView {
    let map: JsRwSignal<Option<Map>> = JsRwSignal::new_local(None::<Map>);

    Effect::new(move |_| {
        let Some(map_instance) = map.get() else {
            return;
        };

        let cb: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(move |event: JsValue| {
            if let Some(coordinate) = clicked_coordinate(&event) {
                on_pick.run(coordinate);
            }
        }));

        if let Err(err) = listen(map_instance.as_ref(), "click", cb.as_ref()) {
            error!("Failed to attach map click handler: {:?}", err);
        }

        cb.forget();
    });

    view! {
        <MapContainer
            style="height: 100%; width: 100%; flex: 1"
            center=Position::new(center.lat, center.lng)
            zoom=PICKER_ZOOM
            set_view=true
            map=map.write_only()
        >
            <TileLayer
                url="https://tile.openstreetmap.org/{z}/{x}/{y}.png"
                attribution="&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
            />
            {move || {
                let point = picked.get().unwrap_or(center);
                view! {
                    <Marker position=Position::new(point.lat, point.lng) draggable=false>
                        <Popup>
                            <p>{format!("{:.4}, {:.4}", point.lat, point.lng)}</p>
                        </Popup>
                    </Marker>
                }
            }}
        </MapContainer>
    }
}

/// Leaflet events are not DOM events, so handlers go through the map's own `on`.
fn listen(target: &JsValue, event: &str, handler: &JsValue) -> Result<(), JsValue> {
    let on: js_sys::Function = js_sys::Reflect::get(target, &JsValue::from_str("on"))?.dyn_into()?;
    on.call2(target, &JsValue::from_str(event), handler)?;
    Ok(())
}

fn clicked_coordinate(event: &JsValue) -> Option<Coordinate> {
    let latlng = js_sys::Reflect::get(event, &JsValue::from_str("latlng")).ok()?;
    let lat = js_sys::Reflect::get(&latlng, &JsValue::from_str("lat")).ok()?.as_f64()?;
    let lng = js_sys::Reflect::get(&latlng, &JsValue::from_str("lng")).ok()?.as_f64()?;
    Some(Coordinate { lat, lng })
}
