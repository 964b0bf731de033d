/// Standalone Leaflet page; `__CENTER__`, `__ZOOM__`, `__LAYERS__` and
/// `__TITLE__` are filled in at render time.
pub(crate) const MAP_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">

<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>__TITLE__</title>

  <!-- Leaflet 1.9.4 -->
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css" crossorigin="anonymous"
    referrerpolicy="no-referrer" />
  <script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js" crossorigin="anonymous"
    referrerpolicy="no-referrer"></script>

  <style>
    html, body { height: 100%; margin: 0; }
    #map { height: 100%; width: 100%; }
  </style>
</head>

<body>
  <div id="map"></div>
  <script>
    const map = L.map("map").setView(__CENTER__, __ZOOM__);

    L.tileLayer("https://tile.openstreetmap.org/{z}/{x}/{y}.png", {
      maxZoom: 19,
      attribution: "&copy; OpenStreetMap contributors",
    }).addTo(map);

    const iconFor = (marker) =>
      L.divIcon({
        className: "",
        html: `<span style="font-size:22px;color:${marker.color};">${marker.symbol}</span>`,
        iconSize: [22, 22],
        iconAnchor: [11, 11],
      });

    const layers = __LAYERS__;
    for (const layer of layers) {
      let shape;
      if (layer.kind === "marker") {
        shape = L.marker(layer.location, { icon: iconFor(layer) });
      } else if (layer.kind === "polygon") {
        shape = L.polygon(layer.ring, {
          color: layer.color,
          fill: true,
          fillColor: layer.fill_color,
          fillOpacity: layer.fill_opacity,
        });
      } else {
        shape = L.polyline(layer.path, {
          color: layer.color,
          weight: layer.weight,
          opacity: layer.opacity,
        });
      }
      if (layer.popup) {
        shape.bindPopup(layer.popup);
      }
      shape.addTo(map);
    }
  </script>
</body>

</html>
"#;
