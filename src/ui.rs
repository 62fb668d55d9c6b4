use axum::response::Html;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub const INDEX_HTML: &str = r#"
<!DOCTYPE html>
<html lang="fr">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>UGC Fashion Creator</title>
    <meta name="description" content="Créateur de contenu UGC pour la mode">
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
            background: linear-gradient(135deg, #f093fb 0%, #f5576c 100%);
            min-height: 100vh;
            padding: 40px 20px;
        }

        .container {
            max-width: 1100px;
            margin: 0 auto;
        }

        .header {
            text-align: center;
            color: white;
            margin-bottom: 30px;
        }

        .header h1 {
            font-size: 2.4em;
            margin-bottom: 10px;
        }

        .upload-section,
        .results-section {
            background: white;
            border-radius: 20px;
            box-shadow: 0 20px 60px rgba(0,0,0,0.25);
            padding: 30px;
            margin-bottom: 30px;
        }

        .upload-zone {
            border: 3px dashed #f5576c;
            border-radius: 15px;
            padding: 50px 20px;
            text-align: center;
            cursor: pointer;
            transition: all 0.3s;
            background: #fff7f9;
        }

        .upload-zone:hover {
            background: #fff0f3;
        }

        .upload-zone.dragging {
            border-color: #c2185b;
            background: #ffe4ec;
            transform: scale(1.02);
        }

        .upload-icon {
            font-size: 4em;
            margin-bottom: 15px;
        }

        .upload-zone h3 {
            color: #f5576c;
            margin-bottom: 8px;
        }

        .upload-zone p {
            color: #999;
        }

        input[type="file"] {
            display: none;
        }

        .preview-grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(140px, 1fr));
            gap: 15px;
            margin: 25px 0;
        }

        .preview-item {
            position: relative;
            border-radius: 10px;
            overflow: hidden;
            box-shadow: 0 4px 15px rgba(0,0,0,0.1);
        }

        .preview-item img {
            width: 100%;
            height: 140px;
            object-fit: cover;
            display: block;
        }

        .remove-btn {
            position: absolute;
            top: 6px;
            right: 6px;
            width: 28px;
            height: 28px;
            border: none;
            border-radius: 50%;
            background: rgba(0,0,0,0.6);
            color: white;
            font-size: 1.1em;
            cursor: pointer;
        }

        .actions {
            text-align: center;
        }

        .btn {
            background: linear-gradient(135deg, #f093fb 0%, #f5576c 100%);
            color: white;
            border: none;
            border-radius: 30px;
            padding: 14px 32px;
            font-size: 1em;
            font-weight: 600;
            cursor: pointer;
            margin: 5px;
        }

        .btn:disabled {
            opacity: 0.6;
            cursor: wait;
        }

        .loading {
            text-align: center;
            padding: 40px;
        }

        .spinner {
            border: 4px solid #f3f3f3;
            border-top: 4px solid #f5576c;
            border-radius: 50%;
            width: 50px;
            height: 50px;
            animation: spin 1s linear infinite;
            margin: 0 auto 20px;
        }

        @keyframes spin {
            0% { transform: rotate(0deg); }
            100% { transform: rotate(360deg); }
        }

        .result-card {
            border-top: 2px solid #f0f0f0;
            padding-top: 25px;
            margin-top: 25px;
        }

        .result-images {
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 20px;
        }

        .result-image-wrapper img {
            width: 100%;
            border-radius: 10px;
        }

        .result-card h3 {
            color: #555;
            font-size: 0.95em;
            margin: 15px 0 10px;
        }

        .fashion-tags {
            display: flex;
            flex-wrap: wrap;
            gap: 10px;
        }

        .fashion-tag {
            background: #fff0f3;
            color: #f5576c;
            padding: 6px 16px;
            border-radius: 20px;
            font-size: 0.85em;
            font-weight: 600;
            border: 2px solid #f5576c;
        }

        .ugc-video-container {
            position: relative;
            max-width: 360px;
            border-radius: 15px;
            overflow: hidden;
        }

        .ugc-animation {
            width: 100%;
            display: block;
            animation: zoom 6s ease-in-out infinite alternate;
        }

        @keyframes zoom {
            from { transform: scale(1); }
            to { transform: scale(1.08); }
        }

        .ugc-overlay {
            position: absolute;
            left: 0;
            right: 0;
            bottom: 0;
            padding: 20px;
            color: white;
            background: linear-gradient(transparent, rgba(0,0,0,0.75));
        }

        .download-section {
            margin-top: 20px;
            text-align: center;
        }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>🎨 UGC Fashion Creator</h1>
            <p>Améliorez vos images mode et créez du contenu UGC professionnel</p>
        </div>

        <div class="upload-section">
            <div class="upload-zone" id="uploadZone">
                <div class="upload-icon">📸</div>
                <h3>Glissez vos images ici</h3>
                <p>ou cliquez pour sélectionner des fichiers</p>
                <input type="file" id="fileInput" accept="image/*" multiple>
            </div>

            <div id="selection" style="display: none">
                <div class="preview-grid" id="previewGrid"></div>
                <div class="actions">
                    <button class="btn" id="processBtn">✨ Traiter les images</button>
                </div>
            </div>
        </div>

        <div class="results-section" id="loading" style="display: none">
            <div class="loading">
                <div class="spinner"></div>
                <div>Amélioration des images et analyse des vêtements...</div>
            </div>
        </div>

        <div class="results-section" id="results" style="display: none">
            <h2>🎉 Résultats</h2>
            <div id="resultList"></div>
        </div>
    </div>

    <script>
        const uploadZone = document.getElementById('uploadZone');
        const fileInput = document.getElementById('fileInput');
        const selection = document.getElementById('selection');
        const previewGrid = document.getElementById('previewGrid');
        const processBtn = document.getElementById('processBtn');
        const loading = document.getElementById('loading');
        const resultsSection = document.getElementById('results');
        const resultList = document.getElementById('resultList');

        let images = [];
        let processing = false;

        uploadZone.addEventListener('click', () => fileInput.click());

        uploadZone.addEventListener('dragover', (e) => {
            e.preventDefault();
            uploadZone.classList.add('dragging');
        });

        uploadZone.addEventListener('dragleave', () => {
            uploadZone.classList.remove('dragging');
        });

        uploadZone.addEventListener('drop', (e) => {
            e.preventDefault();
            uploadZone.classList.remove('dragging');
            handleFiles(e.dataTransfer.files);
        });

        fileInput.addEventListener('change', (e) => {
            handleFiles(e.target.files);
            fileInput.value = '';
        });

        processBtn.addEventListener('click', processImages);

        function readAsDataURL(file) {
            return new Promise((resolve, reject) => {
                const reader = new FileReader();
                reader.onload = () => resolve(reader.result);
                reader.onerror = () => reject(reader.error);
                reader.readAsDataURL(file);
            });
        }

        async function handleFiles(files) {
            if (!files) return;
            const picked = Array.from(files).filter((f) => f.type.startsWith('image/'));
            if (picked.length === 0) return;

            try {
                const encoded = await Promise.all(picked.map(readAsDataURL));
                images = images.concat(encoded);
                renderPreviews();
            } catch (error) {
                console.error('Error reading files:', error);
                alert('Erreur lors de la lecture des fichiers');
            }
        }

        function removeImage(index) {
            images = images.filter((_, i) => i !== index);
            renderPreviews();
        }

        function renderPreviews() {
            previewGrid.innerHTML = '';
            images.forEach((src, index) => {
                const item = document.createElement('div');
                item.className = 'preview-item';

                const img = document.createElement('img');
                img.src = src;
                img.alt = `Preview ${index + 1}`;

                const remove = document.createElement('button');
                remove.className = 'remove-btn';
                remove.textContent = '×';
                remove.addEventListener('click', () => removeImage(index));

                item.append(img, remove);
                previewGrid.appendChild(item);
            });
            selection.style.display = images.length > 0 ? 'block' : 'none';
        }

        function setProcessing(value) {
            processing = value;
            processBtn.disabled = value;
            processBtn.textContent = value ? '⏳ Traitement en cours...' : '✨ Traiter les images';
            loading.style.display = value ? 'block' : 'none';
        }

        async function processImages() {
            if (processing || images.length === 0) return;
            setProcessing(true);
            renderResults([]);

            try {
                const response = await fetch('/api/process', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ images }),
                });

                if (!response.ok) {
                    throw new Error('HTTP ' + response.status);
                }

                const data = await response.json();
                renderResults(data.results);
            } catch (error) {
                console.error('Error processing images:', error);
                alert('Erreur lors du traitement des images');
            } finally {
                setProcessing(false);
            }
        }

        function downloadImage(dataUrl, filename) {
            const link = document.createElement('a');
            link.href = dataUrl;
            link.download = filename;
            link.click();
        }

        function imageBlock(title, src, alt) {
            const wrapper = document.createElement('div');
            wrapper.className = 'result-image-wrapper';
            const heading = document.createElement('h3');
            heading.textContent = title;
            const img = document.createElement('img');
            img.src = src;
            img.alt = alt;
            wrapper.append(heading, img);
            return wrapper;
        }

        function renderResults(results) {
            resultList.innerHTML = '';
            resultsSection.style.display = results.length > 0 ? 'block' : 'none';

            results.forEach((result, index) => {
                const card = document.createElement('div');
                card.className = 'result-card';

                const pair = document.createElement('div');
                pair.className = 'result-images';
                pair.append(
                    imageBlock('📷 Image Originale', result.originalImage, 'Original'),
                    imageBlock('✨ Image Améliorée', result.enhancedImage, 'Enhanced'),
                );

                const itemsHeading = document.createElement('h3');
                itemsHeading.textContent = '👗 Vêtements identifiés';
                const tags = document.createElement('div');
                tags.className = 'fashion-tags';
                result.fashionItems.forEach((item) => {
                    const tag = document.createElement('span');
                    tag.className = 'fashion-tag';
                    tag.textContent = item;
                    tags.appendChild(tag);
                });

                const ugcHeading = document.createElement('h3');
                ugcHeading.textContent = '🎬 Aperçu UGC';
                const ugc = document.createElement('div');
                ugc.className = 'ugc-video-container';
                const ugcImg = document.createElement('img');
                ugcImg.src = result.ugcAnimation;
                ugcImg.alt = 'UGC Animation';
                ugcImg.className = 'ugc-animation';
                const overlay = document.createElement('div');
                overlay.className = 'ugc-overlay';
                const overlayTitle = document.createElement('h4');
                overlayTitle.textContent = 'Style du jour ✨';
                const overlayText = document.createElement('p');
                overlayText.textContent = result.ugcText;
                overlay.append(overlayTitle, overlayText);
                ugc.append(ugcImg, overlay);

                const downloads = document.createElement('div');
                downloads.className = 'download-section';
                const saveEnhanced = document.createElement('button');
                saveEnhanced.className = 'btn';
                saveEnhanced.textContent = "💾 Télécharger l'image";
                saveEnhanced.addEventListener('click', () =>
                    downloadImage(result.enhancedImage, `enhanced_${index + 1}.png`));
                const saveUgc = document.createElement('button');
                saveUgc.className = 'btn';
                saveUgc.textContent = "📥 Télécharger l'aperçu UGC";
                saveUgc.addEventListener('click', () =>
                    downloadImage(result.ugcAnimation, `ugc_preview_${index + 1}.png`));
                downloads.append(saveEnhanced, saveUgc);

                card.append(pair, itemsHeading, tags, ugcHeading, ugc, downloads);
                resultList.appendChild(card);
            });
        }
    </script>
</body>
</html>
"#;
